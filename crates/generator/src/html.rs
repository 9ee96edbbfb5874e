use recipe_viewer_core::SiteConfig;

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const RELOAD_SCRIPT: &str = r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#;

/// Wrap a page body in the shared document shell.
///
/// `header_links_home` turns the site title into a link, which every page
/// except the index wants.
pub fn document(
    site: &SiteConfig,
    page_title: &str,
    body: &str,
    header_links_home: bool,
    is_preview: bool,
    extra_scripts: &str,
) -> String {
    let site_title = html_escape(&site.title);

    let brand = if header_links_home {
        format!(r#"<a href="/" class="brand"><h1>{}</h1></a>"#, site_title)
    } else {
        format!("<h1>{}</h1>", site_title)
    };

    let preview_badge = if is_preview {
        r#"<div class="preview-badge">PREVIEW MODE - Live Reload Active</div>"#
    } else {
        ""
    };

    let footer_text = match &site.footer {
        Some(footer) => html_escape(footer),
        None => format!("Explore delicious recipes with {}!", site_title),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <header class="site-header">
        <div class="header-inner">
            {}
        </div>
    </header>
    {}
    {}
    <footer class="site-footer">
        <p>{}</p>
    </footer>
    {}
    {}
</body>
</html>
"#,
        html_escape(page_title),
        brand,
        preview_badge,
        body,
        footer_text,
        extra_scripts,
        if is_preview { RELOAD_SCRIPT } else { "" }
    )
}
