use crate::page_range::TocRange;
use std::path::Path;

/// Render the LaTeX wrapper around the source PDF.
///
/// Pages before the TOC are included verbatim, followed by a generated
/// `\tableofcontents`, then the rest of the book from the first page after
/// the printed TOC with `records` attached as `addtotoc` bookmarks. Titles
/// are emitted without escaping.
pub fn render_document(records: &str, range: &TocRange, pdf_path: &Path) -> String {
    let pdf = pdf_path.display();
    let start_of_toc = range.start_of_toc();
    let start_of_book = range.start_of_book();

    let mut tex = String::new();
    tex.push_str(
        r"
\documentclass{book}
\usepackage{pdfpages}
\usepackage[pagebackref]{hyperref}
%\usepackage[final]{hyperref}
%\hypersetup{
%    colorlinks,
%    citecolor=black,
%    filecolor=black,
%    linkcolor=black,
%    urlcolor=black
%}
\begin{document}
% The following lines are the only ones you need to edit.
%\noindent{\bfseries{\huge Contents}\hfill Page No.\vspace \bigskipamount \par }
",
    );

    // pdfpages has no notion of an empty range
    if start_of_toc > 1 {
        tex.push_str(&format!(
            "\\includepdf[pages=1-{}]{{{}}}\n",
            start_of_toc - 1,
            pdf
        ));
    }

    tex.push_str(&format!(
        r"\tableofcontents
\addcontentsline{{toc}}{{chapter}}{{Contents}}
\label{{contents}}
\includepdf[pages={start_of_book}-,
addtotoc = {{
    {records}
}}]{{{pdf}}}
\end{{document}}
"
    ));

    tex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_matter_included() {
        let range = TocRange::new(3, 4, 2).unwrap();
        let tex = render_document("\t9,chapter,0,{Intro pg.1},a", &range, Path::new("/b/book.pdf"));
        assert!(tex.contains(r"\includepdf[pages=1-4]{/b/book.pdf}"));
        assert!(tex.contains(r"\includepdf[pages=7-,"));
        assert!(tex.contains(r"\addcontentsline{toc}{chapter}{Contents}"));
        assert!(tex.trim_end().ends_with(r"\end{document}"));
    }

    #[test]
    fn test_editing_hints_kept() {
        let range = TocRange::new(2, 2, 0).unwrap();
        let tex = render_document("", &range, Path::new("/b/book.pdf"));
        let hint = tex
            .find("% The following lines are the only ones you need to edit.")
            .unwrap();
        let first = tex.find(r"\includepdf").unwrap();
        assert!(hint < first);
        assert!(tex.contains(r"%\noindent{\bfseries{\huge Contents}\hfill Page No."));
        assert!(tex.contains("%\\hypersetup{"));
    }

    #[test]
    fn test_toc_on_first_page() {
        let range = TocRange::new(1, 1, 0).unwrap();
        let tex = render_document("", &range, Path::new("/b/book.pdf"));
        assert_eq!(tex.matches(r"\includepdf").count(), 1);
        assert!(tex.contains(r"\includepdf[pages=2-,"));
    }

    #[test]
    fn test_records_inside_addtotoc() {
        let range = TocRange::new(2, 2, 0).unwrap();
        let records = "\t3,chapter,0,{A pg.1},a,\n\t4,chapter,0,{B pg.2},a";
        let tex = render_document(records, &range, Path::new("/b/book.pdf"));
        let block = format!("addtotoc = {{\n    {}\n}}]{{/b/book.pdf}}", records);
        assert!(tex.contains(&block));
    }
}
