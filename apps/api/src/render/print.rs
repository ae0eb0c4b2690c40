//! Print materialiser: turns a [`Page`] into a standalone HTML document.
//!
//! The body markup is the preview tree serialised to HTML, so both outputs
//! share one structure. The shell adds its own stylesheet, print page rules
//! and, optionally, a script that waits for the load event plus a settle
//! delay before invoking the browser's print dialog.

use crate::render::escape::escape_html;
use crate::render::page::Page;
use crate::render::preview;
use crate::render::style;

/// Knobs for the generated print document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Embed the load → delay → `window.print()` script.
    pub auto_print: bool,
    pub settle_delay_ms: u64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            auto_print: true,
            settle_delay_ms: 500,
        }
    }
}

const PRINT_RULES: &str = "\
@page { size: A4; margin: 0; }
html, body { margin: 0; padding: 0; }
body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
.folio-section, .folio-entry, .folio-milestone, .folio-skill { break-inside: avoid; }
@media print { .folio-document { margin: 0; } }
";

/// Renders the complete print document for a resolved page.
pub fn materialize(page: &Page, options: &PrintOptions) -> String {
    let script = if options.auto_print {
        format!(
            "<script>window.addEventListener('load', function () {{ \
             setTimeout(function () {{ window.print(); }}, {}); }});</script>",
            options.settle_delay_ms
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>\n{stylesheet}{print_rules}</style>\n</head>\n\
         <body>\n{document}\n{script}</body>\n</html>\n",
        title = escape_html(&page.title),
        stylesheet = style::STYLESHEET,
        print_rules = PRINT_RULES,
        document = preview::materialize(page).to_html(),
    )
}
