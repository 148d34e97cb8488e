use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::model::{
    Block, CalloutBox, ColorRole, CoverTitle, Heading, SizeRole, StyledLine, StyledSpan, Table,
    TextStyle,
};

use super::{
    LayoutBackend, LayoutError,
    theme::{HexColor, Theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenList {
    Bullets,
    Numbers,
}

/// Renders blocks as a single HTML document with one `<section class="page">`
/// per page.
#[derive(Debug, Clone, Default)]
pub struct HtmlBackend {
    theme: Theme,
    title: String,
}

impl HtmlBackend {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            title: "Report".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn css(&self, style: &TextStyle) -> String {
        let mut css = format!(
            "color:{};font-family:'{}';font-size:{}pt",
            self.theme.color(style.color),
            self.theme.font(style.font),
            self.theme.size(style.size)
        );
        if style.bold {
            css.push_str(";font-weight:700");
        }
        if style.italic {
            css.push_str(";font-style:italic");
        }
        css
    }

    fn write_spans(
        &self,
        out: &mut String,
        spans: &[StyledSpan],
        ambient: &TextStyle,
    ) -> Result<(), LayoutError> {
        for span in spans {
            if span.style == *ambient {
                out.push_str(&text(&span.text));
            } else {
                write!(
                    out,
                    r#"<span style="{}">{}</span>"#,
                    attr(&self.css(&span.style)),
                    text(&span.text)
                )?;
            }
        }
        Ok(())
    }

    fn write_block(&self, out: &mut String, block: &Block) -> Result<(), LayoutError> {
        let body = TextStyle::BODY;
        match block {
            Block::Heading(Heading { level, text: t, style }) => {
                let tag = if *level == 1 { "h1" } else { "h2" };
                writeln!(
                    out,
                    r#"<{tag} style="{}">{}</{tag}>"#,
                    attr(&self.css(style)),
                    text(t)
                )?;
            }
            Block::SectionSubtitle { text: t, style } => writeln!(
                out,
                r#"<p class="section-subtitle" style="{}">{}</p>"#,
                attr(&self.css(style)),
                text(t)
            )?,
            Block::Paragraph { spans } => {
                write!(out, r#"<p style="{}">"#, attr(&self.css(&body)))?;
                self.write_spans(out, spans, &body)?;
                out.push_str("</p>\n");
            }
            Block::BulletItem { spans } => {
                out.push_str("<li>");
                self.write_spans(out, spans, &body)?;
                out.push_str("</li>\n");
            }
            Block::NumberedItem { spans, ordinal } => {
                write!(out, r#"<li value="{ordinal}">"#)?;
                self.write_spans(out, spans, &body)?;
                out.push_str("</li>\n");
            }
            Block::Rule => writeln!(
                out,
                r#"<hr style="border:0;border-top:1px solid {}">"#,
                self.theme.color(ColorRole::Accent)
            )?,
            Block::Table(table) => self.write_table(out, table)?,
            Block::InfoTable { rows } => {
                out.push_str("<table class=\"info\">\n<tbody>\n");
                for (label, value) in rows {
                    writeln!(
                        out,
                        r#"<tr><th scope="row" style="color:{}">{}</th><td>{}</td></tr>"#,
                        self.theme.color(ColorRole::Heading),
                        text(label),
                        text(value)
                    )?;
                }
                out.push_str("</tbody>\n</table>\n");
            }
            Block::CalloutBox(callout) => self.write_callout(out, callout)?,
            Block::StatCallout {
                value,
                label,
                caption,
            } => {
                writeln!(
                    out,
                    r#"<div class="stat" style="border-left:4px solid {}">"#,
                    self.theme.color(ColorRole::Accent)
                )?;
                writeln!(
                    out,
                    r#"<div class="stat-value" style="color:{};font-size:{}pt;font-weight:700">{}</div>"#,
                    self.theme.color(ColorRole::StatValue),
                    self.theme.size(SizeRole::Stat),
                    text(value)
                )?;
                writeln!(out, r#"<div class="stat-label">{}</div>"#, text(label))?;
                if let Some(caption) = caption {
                    writeln!(
                        out,
                        r#"<div class="stat-caption" style="color:{}">{}</div>"#,
                        self.theme.color(ColorRole::Muted),
                        text(caption)
                    )?;
                }
                out.push_str("</div>\n");
            }
            Block::CoverTitle(cover) => self.write_cover(out, cover)?,
            Block::CoverSubtitle { text: t, style } => writeln!(
                out,
                r#"<p class="cover-subtitle" style="text-align:{};{}">{}</p>"#,
                self.theme.cover_alignment.as_css(),
                attr(&self.css(style)),
                text(t)
            )?,
            Block::Spacer => out.push_str("<div class=\"spacer\"></div>\n"),
            // Page breaks are handled by `layout`, which closes the section.
            Block::PageBreak => {}
        }
        Ok(())
    }

    fn write_table(&self, out: &mut String, table: &Table) -> Result<(), LayoutError> {
        out.push_str("<table>\n<thead>\n<tr>");
        for header in &table.headers {
            write!(
                out,
                r#"<th style="background:{};color:{}">{}</th>"#,
                self.theme.color(table.header_fill),
                self.theme.color(ColorRole::TableHeaderText),
                text(header)
            )?;
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for (i, row) in table.rows.iter().enumerate() {
            // Rows are counted from 1, so every odd index is an even row.
            if i % 2 == 1 {
                write!(
                    out,
                    r#"<tr style="background:{}">"#,
                    self.theme.color(table.banded_row)
                )?;
            } else {
                out.push_str("<tr>");
            }
            for cell in row {
                write!(out, "<td>{}</td>", text(cell))?;
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
        Ok(())
    }

    fn write_callout(&self, out: &mut String, callout: &CalloutBox) -> Result<(), LayoutError> {
        writeln!(
            out,
            r#"<aside class="callout" style="background:{};color:{};border-left:4px solid {}">"#,
            self.theme.color(callout.background),
            self.theme.color(ColorRole::CalloutText),
            self.theme.color(ColorRole::Accent)
        )?;
        if let Some(headline) = &callout.headline {
            writeln!(
                out,
                r#"<p class="callout-headline" style="{}">{}</p>"#,
                attr(&self.css(&callout.headline_style)),
                text(headline)
            )?;
        }
        for line in &callout.body {
            self.write_callout_line(out, line)?;
        }
        out.push_str("</aside>\n");
        Ok(())
    }

    fn write_callout_line(&self, out: &mut String, line: &StyledLine) -> Result<(), LayoutError> {
        let ambient = TextStyle::CALLOUT;
        let css = self.css(&ambient);
        match line.marker {
            Some(marker) => write!(
                out,
                r#"<p class="check" style="{}"><span style="color:{}">{}</span> "#,
                attr(&css),
                self.theme.color(ColorRole::Positive),
                text(&marker.to_string())
            )?,
            None => write!(out, r#"<p style="{}">"#, attr(&css))?,
        }
        self.write_spans(out, &line.spans, &ambient)?;
        out.push_str("</p>\n");
        Ok(())
    }

    fn write_cover(&self, out: &mut String, cover: &CoverTitle) -> Result<(), LayoutError> {
        writeln!(
            out,
            r#"<h1 class="cover-title" style="text-align:{}"><span style="{}">{}</span><br><span style="{}">{}</span></h1>"#,
            self.theme.cover_alignment.as_css(),
            attr(&self.css(&cover.line1_style)),
            text(&cover.line1),
            attr(&self.css(&cover.line2_style)),
            text(&cover.line2)
        )?;
        Ok(())
    }
}

impl LayoutBackend for HtmlBackend {
    type Output = String;

    fn layout(&mut self, blocks: &[Block]) -> Result<String, LayoutError> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", text(&self.title))?;
        writeln!(
            out,
            "<style>.page{{max-width:210mm;margin:0 auto 2em;padding:20mm;background:{}}}\
             .spacer{{height:1em}}table{{border-collapse:collapse;width:100%}}\
             td,th{{padding:4px 8px;text-align:left}}</style>",
            HexColor::WHITE
        )?;
        writeln!(out, "</head>\n<body>\n<section class=\"page\">")?;

        let mut open_list: Option<OpenList> = None;
        for block in blocks {
            let wanted = match block {
                Block::BulletItem { .. } => Some(OpenList::Bullets),
                Block::NumberedItem { .. } => Some(OpenList::Numbers),
                _ => None,
            };
            if open_list != wanted {
                match open_list {
                    Some(OpenList::Bullets) => out.push_str("</ul>\n"),
                    Some(OpenList::Numbers) => out.push_str("</ol>\n"),
                    None => {}
                }
                match wanted {
                    Some(OpenList::Bullets) => out.push_str("<ul>\n"),
                    Some(OpenList::Numbers) => out.push_str("<ol>\n"),
                    None => {}
                }
                open_list = wanted;
            }

            if matches!(block, Block::PageBreak) {
                out.push_str("</section>\n<section class=\"page\">\n");
            } else {
                self.write_block(&mut out, block)?;
            }
        }
        match open_list {
            Some(OpenList::Bullets) => out.push_str("</ul>\n"),
            Some(OpenList::Numbers) => out.push_str("</ol>\n"),
            None => {}
        }

        out.push_str("</section>\n</body>\n</html>\n");
        Ok(out)
    }
}
