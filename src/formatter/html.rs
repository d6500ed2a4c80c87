use std::fmt::Write;

/// Строка списка определений: название и значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub term: String,
    pub detail: String,
}

impl PageEntry {
    pub fn new(term: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            detail: detail.into(),
        }
    }
}

/// HTML страница со статистикой, браузер обновляет ее раз в секунду
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render(entries: &[PageEntry]) -> String {
        let mut html = String::from("<!DOCTYPE html>");
        html.push_str(
            "<html><head>\n  <meta http-equiv=\"refresh\" content=\"1\">\n  \
             <title>VDSL Statistics</title></head><body><dl>",
        );

        for entry in entries {
            // запись в String не падает
            let _ = write!(
                html,
                "<dt>{}</dt><dd>{}</dd>",
                escape(&entry.term),
                escape(&entry.detail)
            );
        }

        html.push_str("</dl></body></html>");
        html
    }
}

/// Текст статуса приходит с устройства
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
