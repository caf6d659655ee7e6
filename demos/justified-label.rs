//! Lays a few paragraphs of lorem ipsum out as full-justified labels and writes them to
//! `justified-label.pdf`.
//!
//! ```text
//! cargo run --example justified-label -- path/to/Font-Regular.ttf
//! ```

use pdf_justify::layout::Margins;
use pdf_justify::pagesize;
use pdf_justify::{colours, Document, Font, In, Info, JustifiedLabel, PDFError, Page, Pt, Rect};

fn main() -> Result<(), PDFError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(font_path) = std::env::args().nth(1) else {
        eprintln!("usage: justified-label <font.ttf|font.otf>");
        std::process::exit(2);
    };

    // load a font to embed and use
    let font = Font::load_path(font_path)?;

    let mut doc = Document::default();
    let mut info = Info::new();
    info.title("Justified labels").subject("pdf-justify demo");
    doc.set_info(info);
    let font = doc.add_font(font);

    // one label filling the content box of the first page
    let mut page = Page::new(pagesize::LETTER, Some(Margins::all(In(1.0))));
    let text = lipsum::lipsum(180);
    let mut label = JustifiedLabel::new(font, Pt(12.0), page.content_box).with_text(&text);
    let lines = label.render(&doc, &mut page)?;
    println!("page 1: {lines} lines at {}", page.content_box.width());
    doc.add_page(page);

    // the same label after a resize to a narrow column, in a different colour
    let mut page = Page::new(pagesize::LETTER, Some(Margins::all(In(1.0))));
    let (x1, y2) = page.content_box.top_left();
    label.resize(Rect::new(x1, page.content_box.y1, x1 + Pt(216.0), y2));
    label.set_colour(colours::BLUE);
    let lines = label.render(&doc, &mut page)?;
    println!("page 2: {lines} lines at {}", label.bounds().width());
    doc.add_page(page);

    let out = std::fs::File::create("justified-label.pdf")?;
    doc.write(out)
}
