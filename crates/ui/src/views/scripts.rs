use dioxus::document::eval;

pub async fn focus_element(element_id: &str) {
    let script = focus_script(element_id);
    let _ = eval(&script).await;
}

fn focus_script(element_id: &str) -> String {
    format!(
        r#"
        const el = document.getElementById("{element_id}");
        if (el) {{ el.focus(); }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_script_targets_the_element() {
        let script = focus_script("output_4");
        assert!(script.contains(r#"document.getElementById("output_4")"#));
        assert!(script.contains("el.focus()"));
    }
}
