//! Markup for the hamburger-style navigation icon: a `div` holding N empty
//! `span` bars.

#[derive(Debug, thiserror::Error)]
pub enum NavIconError {
    #[error("invalid element id {0:?}: must be non-empty without whitespace, quotes, '<', '>' or '&'")]
    InvalidId(String),
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
}

/// Build `<div id="ID">` followed by `span_count` `<span></span>` and `</div>`.
pub fn nav_icon(id: &str, span_count: usize) -> Result<String, NavIconError> {
    if !is_valid_id(id) {
        return Err(NavIconError::InvalidId(id.to_string()));
    }

    const SPAN: &str = "<span></span>";
    let mut html = String::with_capacity(id.len() + 16 + SPAN.len() * span_count);
    html.push_str("<div id=\"");
    html.push_str(id);
    html.push_str("\">");
    for _ in 0..span_count {
        html.push_str(SPAN);
    }
    html.push_str("</div>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_spans() {
        assert_eq!(
            nav_icon("nav-icon1", 3).unwrap(),
            "<div id=\"nav-icon1\"><span></span><span></span><span></span></div>"
        );
    }

    #[test]
    fn test_five_spans() {
        let html = nav_icon("my-icon", 5).unwrap();
        assert!(html.starts_with("<div id=\"my-icon\">"));
        assert_eq!(html.matches("<span></span>").count(), 5);
    }

    #[test]
    fn test_zero_spans() {
        assert_eq!(nav_icon("x", 0).unwrap(), "<div id=\"x\"></div>");
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["", "a b", "a\"b", "<x>", "a&b", "it's"] {
            assert!(
                matches!(nav_icon(id, 1), Err(NavIconError::InvalidId(_))),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unicode_id() {
        assert_eq!(nav_icon("меню", 1).unwrap(), "<div id=\"меню\"><span></span></div>");
    }
}
