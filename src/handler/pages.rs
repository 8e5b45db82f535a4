//! HTML page and fragment rendering
//!
//! Handcrafted markup for the home page and the shared response fragments.
//! Every fragment carries a "back" button returning to the home page.

/// Render the home page with its three endpoint forms.
pub fn home_page() -> String {
    String::from(
        r#"<html>
<head><title>Greeting & File Page</title></head>
<body>
    <h2>Greeting Form</h2>
    <form action="/greet" method="GET">
        <input type="text" name="name" placeholder="Your name" required>
        <button type="submit">Greet Me</button>
    </form>

    <h2>Write to File</h2>
    <form action="/writeFile" method="GET">
        <input type="text" name="text" placeholder="Enter text to save" required>
        <button type="submit">Save to File</button>
    </form>

    <h2>Read from File</h2>
    <form action="/readFile/file.txt" method="GET">
        <button type="submit">Read File</button>
    </form>
</body>
</html>"#,
    )
}

/// Wrap a fragment with the back button affordance.
pub fn with_back(fragment: &str) -> String {
    format!("{fragment}<br><br><button onclick=\"window.location.href='/'\">⬅ Back</button>")
}

/// Render an error fragment in red.
pub fn error_fragment(message: &str) -> String {
    with_back(&format!("<p style=\"color:red;\">{message}</p>"))
}

/// Render an informational fragment in blue.
pub fn info_fragment(message: &str) -> String {
    with_back(&format!("<p style=\"color:blue;\">{message}</p>"))
}

/// Render file contents verbatim inside a preformatted block.
pub fn pre_fragment(content: &str) -> String {
    with_back(&format!("<pre style=\"color:blue;\">{content}</pre>"))
}

/// Fixed body for undefined routes.
pub fn not_found_page() -> String {
    error_fragment("404 Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_has_three_forms() {
        let html = home_page();
        assert_eq!(html.matches("<form").count(), 3);
        assert!(html.contains("action=\"/greet\""));
        assert!(html.contains("action=\"/writeFile\""));
        assert!(html.contains("action=\"/readFile/file.txt\""));
    }

    #[test]
    fn test_fragments_carry_back_button() {
        assert!(error_fragment("nope").contains("window.location.href='/'"));
        assert!(info_fragment("ok").contains("window.location.href='/'"));
        assert!(pre_fragment("data").contains("window.location.href='/'"));
    }

    #[test]
    fn test_pre_fragment_wraps_content() {
        let html = pre_fragment("line one\nline two\n");
        assert!(html.contains("<pre style=\"color:blue;\">line one\nline two\n</pre>"));
    }

    #[test]
    fn test_not_found_page_is_fixed() {
        assert!(not_found_page().contains("404 Not Found"));
    }
}
