use svg::Document;
use svg::node::element::{Group, Rectangle, Text};

use crate::entities::Panel;
use crate::geometry::primitives::Trapezoid;
use crate::io::svg::svg_util::{self, SvgDrawOptions};

const CARD_WIDTH: f64 = 150.0;
/// Width available to the widest panel within a card
const PANEL_DRAW_WIDTH: f64 = 100.0;
const CARD_GAP: f64 = 10.0;
const TEXT_BAND: f64 = 60.0;
const CARDS_PER_ROW: usize = 4;
const FONT_SIZE: f64 = 10.0;

/// Draws one card per panel: the seam-inclusive trapezoid with its waist, hem and length dimensions,
/// followed by the raw and seam-inclusive measurements.
/// All panels share a single scale, the widest panel spans 100 units.
pub fn panels_to_svg(panels: &[Panel], options: SvgDrawOptions) -> Document {
    let colors = options.theme.colors();
    let max_width = panels
        .iter()
        .map(Panel::bbox_width)
        .fold(0.0, f64::max);
    let scale = match max_width > 0.0 {
        true => PANEL_DRAW_WIDTH / max_width,
        false => 1.0,
    };
    let max_height = panels
        .iter()
        .map(|p| p.height_with_seam * scale)
        .fold(0.0, f64::max);
    let card_height = max_height + TEXT_BAND + 2.0 * CARD_GAP;

    let cards = panels.iter().enumerate().fold(
        Group::new().set("id", "panel_cards"),
        |group, (i, panel)| {
            let (col, row) = (i % CARDS_PER_ROW, i / CARDS_PER_ROW);
            let x = CARD_GAP + col as f64 * (CARD_WIDTH + CARD_GAP);
            let y = CARD_GAP + row as f64 * (card_height + CARD_GAP);
            group.add(panel_card(panel, scale, card_height, (x, y), &options))
        },
    );

    let n_cols = panels.len().clamp(1, CARDS_PER_ROW);
    let n_rows = panels.len().div_ceil(CARDS_PER_ROW).max(1);
    let width = CARD_GAP + n_cols as f64 * (CARD_WIDTH + CARD_GAP);
    let height = CARD_GAP + n_rows as f64 * (card_height + CARD_GAP);

    Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", colors.background_fill),
        )
        .add(cards)
}

fn panel_card(
    panel: &Panel,
    scale: f64,
    card_height: f64,
    (x, y): (f64, f64),
    options: &SvgDrawOptions,
) -> Group {
    let colors = options.theme.colors();
    let fill = svg_util::panel_fill(&colors, panel.id);
    let height = panel.height_with_seam * scale;

    // center the trapezoid horizontally within the card
    let outline = {
        let mut t = panel.outline();
        let dx = (CARD_WIDTH / scale - panel.bbox_width()) / 2.0;
        t.corners.iter_mut().for_each(|c| c.0 += dx);
        t
    };

    let text = |content: String, tx: f64, ty: f64| {
        Text::new(content)
            .set("x", tx)
            .set("y", ty)
            .set("text-anchor", "middle")
            .set("font-size", FONT_SIZE)
            .set("fill", colors.text_fill)
    };

    let mut shape = Group::new()
        .set("transform", format!("translate(0 {CARD_GAP})"))
        .add(trapezoid(&outline, scale, &fill));
    if options.draw_labels {
        shape = shape
            .add(text(
                format!("W: {:.2}cm", panel.waist_width_with_seam),
                CARD_WIDTH / 2.0,
                FONT_SIZE + 2.0,
            ))
            .add(text(
                format!("H: {:.2}cm", panel.hem_width_with_seam),
                CARD_WIDTH / 2.0,
                height - 4.0,
            ))
            .add(
                text(
                    format!("L: {:.2}cm", panel.height_with_seam),
                    FONT_SIZE,
                    height / 2.0,
                )
                .set("transform", format!("rotate(-90 {} {})", FONT_SIZE, height / 2.0)),
            );
    }

    let text_y = CARD_GAP + height + 14.0;
    let details = [
        format!(
            "Waist: {:.2}cm ({:.2}cm with seam)",
            panel.waist_width, panel.waist_width_with_seam
        ),
        format!(
            "Hem: {:.2}cm ({:.2}cm with seam)",
            panel.hem_width, panel.hem_width_with_seam
        ),
        format!(
            "Length: {:.2}cm ({:.2}cm with seam)",
            panel.height, panel.height_with_seam
        ),
    ];

    let card = Group::new()
        .set("id", format!("panel_card_{}", panel.id))
        .set("transform", format!("translate({x} {y})"))
        .add(
            Rectangle::new()
                .set("width", CARD_WIDTH)
                .set("height", card_height)
                .set("fill", "white")
                .set("stroke", "#CCCCCC"),
        )
        .add(text(
            format!("Panel {}", panel.id),
            CARD_WIDTH / 2.0,
            card_height - 4.0,
        ))
        .add(shape);

    details
        .into_iter()
        .enumerate()
        .fold(card, |card, (i, line)| {
            card.add(
                text(line, CARD_WIDTH / 2.0, text_y + i as f64 * (FONT_SIZE + 2.0))
                    .set("font-size", FONT_SIZE * 0.7),
            )
        })
}

fn trapezoid(outline: &Trapezoid, scale: f64, fill: &str) -> svg::node::element::Polygon {
    svg_util::trapezoid_polygon(
        outline,
        scale,
        &[("fill", fill), ("stroke", "#333333"), ("stroke-width", "1")],
    )
}
