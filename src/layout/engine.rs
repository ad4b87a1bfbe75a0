//! The pagination engine.

use super::geometry::{
    PageGeometry, DIVIDER_SPACE_AFTER, DIVIDER_SPACE_BEFORE, DIVIDER_STROKE_WEIGHT, LIST_BULLET,
    NESTED_LIST_MARKER,
};
use super::{LayoutStats, TextMeasurer, TextStyle};
use crate::error::Result;
use crate::model::{ClassifiedLine, Divider, Document, LineKind, Page, TextElement};
use crate::parser::format_inline;
use crate::template::Template;

/// Lay out classified lines in order and return the finished document.
///
/// The first measurement failure aborts the run.
pub fn layout_lines<M>(
    lines: &[ClassifiedLine],
    template: &Template,
    measurer: &M,
    geometry: PageGeometry,
) -> Result<(Document, LayoutStats)>
where
    M: TextMeasurer + ?Sized,
{
    let mut engine = LayoutEngine::new(template, measurer, geometry);
    for line in lines {
        engine.place_line(line)?;
    }
    Ok(engine.finish())
}

/// Places lines top to bottom, starting a new page when one is full.
///
/// The engine always has a current page; the first one is created up front
/// with the cursor at the top margin.
pub struct LayoutEngine<'a, M: TextMeasurer + ?Sized> {
    template: &'a Template,
    measurer: &'a M,
    geometry: PageGeometry,
    document: Document,
    y: f32,
    stats: LayoutStats,
}

impl<'a, M: TextMeasurer + ?Sized> LayoutEngine<'a, M> {
    /// Create an engine with one empty page.
    pub fn new(template: &'a Template, measurer: &'a M, geometry: PageGeometry) -> Self {
        let mut engine = Self {
            template,
            measurer,
            geometry,
            document: Document::new(template.clone()),
            y: template.margin,
            stats: LayoutStats::new(),
        };
        engine.start_page();
        engine
    }

    /// Current vertical cursor.
    pub fn cursor_y(&self) -> f32 {
        self.y
    }

    /// Number of pages created so far.
    pub fn page_count(&self) -> u32 {
        self.document.page_count()
    }

    /// Width available to text.
    pub fn content_width(&self) -> f32 {
        self.template.content_width(self.geometry.width)
    }

    /// Place one classified line.
    pub fn place_line(&mut self, line: &ClassifiedLine) -> Result<()> {
        self.stats.add_line(line.kind);
        match line.kind {
            LineKind::Empty => self.y += self.template.spacing.empty,
            LineKind::Divider => self.place_divider(),
            _ => self.place_text(line)?,
        }
        Ok(())
    }

    /// Finish the run, handing over the document and its statistics.
    pub fn finish(mut self) -> (Document, LayoutStats) {
        self.document.metadata.line_count = self.stats.line_count;
        self.document.metadata.page_count = self.document.page_count();
        (self.document, self.stats)
    }

    fn place_divider(&mut self) {
        let margin = self.template.margin;
        self.y += DIVIDER_SPACE_BEFORE;

        if self.y + DIVIDER_SPACE_AFTER > self.geometry.height - margin {
            self.start_page();
        }

        let divider = Divider {
            x: margin,
            y: self.y,
            width: self.content_width(),
            color: self.template.colors.divider,
            stroke_weight: DIVIDER_STROKE_WEIGHT,
        };
        self.current_page().add_divider(divider);
        self.y += DIVIDER_SPACE_AFTER;
    }

    fn place_text(&mut self, line: &ClassifiedLine) -> Result<()> {
        let template = self.template;
        let margin = template.margin;
        let kind = line.kind;

        let content = display_content(line);
        let style = TextStyle::new(&template.font, template.font_size(kind), kind.is_heading());

        self.y += template.spacing_before(kind);

        let runs = format_inline(&content);
        let content_width = self.content_width();
        let natural = self.measurer.natural_size(&runs, &style)?;
        let (width, height, fixed_width) = if natural.width > content_width {
            let wrapped = self.measurer.wrapped_size(&runs, &style, content_width)?;
            (content_width, wrapped.height, true)
        } else {
            (natural.width, natural.height, false)
        };

        // Overflow is decided only now that the height is known.
        if self.y + height + margin > self.geometry.height {
            if height + 2.0 * margin > self.geometry.height {
                log::warn!(
                    "{} element is taller ({:.1}px) than the usable page height",
                    kind,
                    height
                );
            }
            self.start_page();
        }

        let element = TextElement {
            kind,
            x: margin,
            y: self.y,
            width,
            height,
            fixed_width,
            font_size: style.size,
            bold: style.bold,
            color: template.text_color(kind),
            runs,
        };

        if kind == LineKind::H1 && self.document.metadata.title.is_none() {
            self.document.metadata.title = Some(element.plain_text());
        }

        self.stats.add_text(&element);
        self.current_page().add_text(element);
        self.y += height + template.spacing.after_line;
        Ok(())
    }

    /// Append a page and move the cursor to its top margin.
    fn start_page(&mut self) {
        let number = self.document.page_count() + 1;
        let page = Page::new(
            number,
            self.geometry.page_x(number),
            self.geometry.width,
            self.geometry.height,
        );
        if number > 1 {
            log::debug!("Page break at y={:.1}, starting page {}", self.y, number);
        }
        self.document.add_page(page);
        self.stats.add_page();
        self.y = self.template.margin;
    }

    fn current_page(&mut self) -> &mut Page {
        let last = self.document.pages.len() - 1;
        &mut self.document.pages[last]
    }
}

/// Content as displayed: list items get their bullet or nested marker.
fn display_content(line: &ClassifiedLine) -> String {
    match line.kind {
        LineKind::List => format!("{}{}", LIST_BULLET, line.content),
        LineKind::NestedList => {
            let rest = line.content.trim_start();
            let rest = rest.strip_prefix('-').unwrap_or(rest).trim_start();
            format!("{}{}", NESTED_LIST_MARKER, rest)
        }
        _ => line.content.clone(),
    }
}
