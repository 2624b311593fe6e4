//! Fixed HTML shell around a converted body.

const BEFORE_TITLE: &str = "<!doctype html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/water.css@2/out/water.css\">\n\
<title>";

const AFTER_TITLE: &str = "</title>\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
</head>\n\
<body>\n";

const CLOSING: &str = "\n</body>\n</html>";

/// Wrap a body in the standalone document shell.
///
/// Neither `title` nor `body` is escaped.
pub fn assemble_document(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(
        BEFORE_TITLE.len() + title.len() + AFTER_TITLE.len() + body.len() + CLOSING.len(),
    );
    html.push_str(BEFORE_TITLE);
    html.push_str(title);
    html.push_str(AFTER_TITLE);
    html.push_str(body);
    html.push_str(CLOSING);
    html
}
