use std::collections::{HashMap, HashSet};

/// Clean an author-supplied markup fragment before it is injected.
#[must_use]
pub fn sanitize_markup(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "hr", "em", "strong", "b", "i", "u", "sub", "sup", "code",
        "pre", "blockquote", "ul", "ol", "li", "a", "img", "h1", "h2", "h3", "h4", "h5", "h6",
        "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href", "target"].into_iter().collect());
    attributes.insert("img", ["src", "alt", "width", "height"].into_iter().collect());
    attributes.insert("td", ["colspan", "rowspan"].into_iter().collect());
    attributes.insert("th", ["colspan", "rowspan"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .add_generic_attributes(["class"])
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_formatting_markup() {
        let html = sanitize_markup(r#"<p class="lead">What is <b>2</b> + <i>2</i>?</p>"#);
        assert_eq!(html, r#"<p class="lead">What is <b>2</b> + <i>2</i>?</p>"#);
    }

    #[test]
    fn strips_scripts_and_handlers() {
        let html = sanitize_markup(r#"<p onclick="steal()">Hi</p><script>alert(1)</script>"#);
        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn keeps_images() {
        let html = sanitize_markup(r#"<img src="https://example.com/a.png" alt="diagram">"#);
        assert!(html.contains(r#"src="https://example.com/a.png""#));
        assert!(html.contains(r#"alt="diagram""#));
    }
}
