use textfit::pagesize;
use textfit::{fit_text, Colour, FitMethod, FitOptions, HAlign, PdfSurface, Rect, TtfFont, VAlign};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let font_path = args
        .next()
        .ok_or("usage: fit-banner <font.ttf> [caption]")?;
    let caption = args
        .next()
        .unwrap_or_else(|| "Sphinx of black quartz, judge my vow".to_string());

    // load a font to measure and outline the text with
    let font = TtfFont::load(std::fs::read(&font_path)?)?;
    if let Some(name) = font.name() {
        tracing::info!(%name, "loaded font");
    }

    let mut page = PdfSurface::new(pagesize::LETTER);

    let boxes = [
        (Rect::new(72.0, 72.0, 468.0, 120.0), HAlign::Left, VAlign::Bottom),
        (Rect::new(72.0, 216.0, 468.0, 60.0), HAlign::Center, VAlign::Center),
        (Rect::new(72.0, 300.0, 200.0, 200.0), HAlign::Right, VAlign::Top),
        (Rect::new(300.0, 300.0, 240.0, 30.0), HAlign::Center, VAlign::Bottom),
    ];

    for (rect, h_align, v_align) in boxes {
        let options = FitOptions {
            h_align,
            v_align,
            rect_fill: Some(Colour::new_grey(0.9)),
            draw_rect: true,
            ..Default::default()
        };
        let outcome = fit_text(&mut page, &caption, &font, Some(rect), &options)?;
        println!(
            "{:?}/{:?}: size {} after {} steps{}",
            h_align,
            v_align,
            outcome.font_size,
            outcome.iterations,
            if outcome.fits { "" } else { " (overflowing)" }
        );
    }

    // highlight only behind the text, with descenders ignored
    let options = FitOptions::builder()
        .fit_method(FitMethod::CapHeight)
        .h_align_token("middle")?
        .rect_fill_token("#ffe066")?
        .rect_fill_only_text(true)
        .fill_padding(4.0)
        .text_padding(-8.0)
        .build()?;
    fit_text(
        &mut page,
        &caption,
        &font,
        Some(Rect::new(72.0, 540.0, 468.0, 100.0)),
        &options,
    )?;

    let out = std::fs::File::create("fit-banner.pdf")?;
    page.write(out)?;
    Ok(())
}
