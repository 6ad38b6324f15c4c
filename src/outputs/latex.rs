//! LaTeX rendering of the press review.
//!
//! Every piece of human-readable text (the date line, company names, article
//! titles) goes through [`escape_latex`] before it is embedded. Links go
//! through the narrower [`escape_url`] so `\href` still sees a usable URL.

use crate::models::CompanySection;

pub const DOCUMENT_TITLE: &str = "BeLux Weekly Press Review";
pub const NO_ARTICLES_MARKER: &str = "\\textit{No relevant articles found.}";

/// Ordered substitution table for running text.
///
/// Backslash must stay first: the later replacements introduce backslashes
/// of their own, and those must not be escaped again. It is closed with the
/// italic correction `\/` rather than `{}` or a space: the brace passes would
/// rewrite `{}`, and TeX swallows spaces after a control word.
const LATEX_ESCAPES: &[(&str, &str)] = &[
    ("\\", "\\textbackslash\\/"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("$", "\\$"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("~", "\\textasciitilde{}"),
    ("^", "\\textasciicircum{}"),
];

const URL_ESCAPES: &[(&str, &str)] = &[("%", "\\%"), ("#", "\\#")];

fn apply_escapes(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Escape text for use in a LaTeX document body.
pub fn escape_latex(text: &str) -> String {
    apply_escapes(text, LATEX_ESCAPES)
}

/// Escape a URL for use as the first argument of `\href`.
pub fn escape_url(url: &str) -> String {
    apply_escapes(url, URL_ESCAPES)
}

fn preamble(date: &str) -> Vec<String> {
    vec![
        "\\documentclass[11pt,a4paper]{article}".to_string(),
        "\\usepackage[utf8]{inputenc}".to_string(),
        "\\usepackage{hyperref}".to_string(),
        "\\usepackage{geometry}".to_string(),
        "\\geometry{margin=1in}".to_string(),
        format!("\\title{{{DOCUMENT_TITLE}}}"),
        format!("\\date{{{}}}", escape_latex(date)),
        "\\begin{document}".to_string(),
        "\\maketitle".to_string(),
        "\\section*{Summary}".to_string(),
        "This weekly press review focuses on Belgium and Luxembourg companies.".to_string(),
        "\\vspace{1cm}".to_string(),
    ]
}

/// Render the lines of one company section.
pub fn render_section(section: &CompanySection) -> Vec<String> {
    let mut lines = vec![format!("\\section*{{{}}}", escape_latex(&section.company))];
    if section.articles.is_empty() {
        lines.push(NO_ARTICLES_MARKER.to_string());
    } else {
        for article in &section.articles {
            lines.push(format!("\\textbf{{{}}}\\\\", escape_latex(&article.title)));
            lines.push(format!(
                "\\href{{{}}}{{Read more}}\\\\[0.5em]",
                escape_url(&article.link)
            ));
        }
    }
    lines
}

/// Assemble the complete document: preamble, one section per company in
/// order, then `\end{document}`.
pub fn render_document(date: &str, sections: &[CompanySection]) -> String {
    let mut lines = preamble(date);
    lines.extend(sections.iter().flat_map(render_section));
    lines.push("\\end{document}".to_string());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn section(company: &str, titles: &[&str]) -> CompanySection {
        CompanySection {
            company: company.to_string(),
            articles: titles
                .iter()
                .map(|t| Article {
                    title: t.to_string(),
                    link: "https://example.com/a?x=1%2C2#top".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_escape_special_characters() {
        let escaped = escape_latex("100% & Co_");
        assert_eq!(escaped, "100\\% \\& Co\\_");
        assert!(!escaped.contains("\\\\"));
    }

    #[test]
    fn test_escape_full_table() {
        assert_eq!(
            escape_latex("$5 #1 {x} ~y ^z"),
            "\\$5 \\#1 \\{x\\} \\textasciitilde{}y \\textasciicircum{}z"
        );
    }

    #[test]
    fn test_backslash_is_escaped_once() {
        assert_eq!(escape_latex("C:\\temp"), "C:\\textbackslash\\/temp");
        // the backslashes added for `&` and `_` are not touched again
        assert_eq!(escape_latex("\\&_"), "\\textbackslash\\/\\&\\_");
        assert!(!escape_latex("a\\b & c").contains("\\\\"));
    }

    #[test]
    fn test_backslash_keeps_following_space() {
        // a space right after the escape must survive typesetting
        assert_eq!(escape_latex("a\\ b"), "a\\textbackslash\\/ b");
        assert_eq!(escape_latex("x\\{y}"), "x\\textbackslash\\/\\{y\\}");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_latex("Barco opens campus"), "Barco opens campus");
        assert_eq!(escape_latex("Société Générale"), "Société Générale");
    }

    #[test]
    fn test_escape_url_is_narrow() {
        assert_eq!(
            escape_url("https://example.com/a_b?q=1%2C2&x=~y#frag"),
            "https://example.com/a_b?q=1\\%2C2&x=~y\\#frag"
        );
    }

    #[test]
    fn test_section_with_articles() {
        let lines = render_section(&section("Acme & Sons", &["Acme opens Brussels office"]));
        assert_eq!(
            lines,
            vec![
                "\\section*{Acme \\& Sons}".to_string(),
                "\\textbf{Acme opens Brussels office}\\\\".to_string(),
                "\\href{https://example.com/a?x=1\\%2C2\\#top}{Read more}\\\\[0.5em]".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_section_has_marker() {
        let lines = render_section(&section("Etex", &[]));
        assert_eq!(lines, vec!["\\section*{Etex}".to_string(), NO_ARTICLES_MARKER.to_string()]);
    }

    #[test]
    fn test_document_layout() {
        let doc = render_document(
            "16 October 2026",
            &[section("Barco", &["Barco in Belgium"]), section("SES", &[])],
        );
        assert!(doc.starts_with("\\documentclass[11pt,a4paper]{article}\n"));
        assert!(doc.contains("\\title{BeLux Weekly Press Review}"));
        assert!(doc.contains("\\date{16 October 2026}"));
        assert!(doc.ends_with("\\end{document}\n"));

        let barco = doc.find("\\section*{Barco}").unwrap();
        let ses = doc.find("\\section*{SES}").unwrap();
        assert!(doc.find("\\maketitle").unwrap() < barco);
        assert!(barco < ses);
        assert_eq!(doc.matches(NO_ARTICLES_MARKER).count(), 1);
    }

    #[test]
    fn test_date_line_is_escaped() {
        let doc = render_document("week #42", &[]);
        assert!(doc.contains("\\date{week \\#42}"));
    }
}
