use svg::Document;
use svg::node::element::{Definitions, Group, Rectangle, Text, Title, Use};

use crate::entities::FabricLayout;
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util::{self, SvgDrawOptions};

/// Draws the layout in fabric coordinates: the fabric cut to the required length, with every panel
/// at its placement and rotation.
pub fn layout_to_svg(layout: &FabricLayout, options: SvgDrawOptions) -> Document {
    let colors = options.theme.colors();
    let fabric_width = layout.fabric.width;
    // keep a visible strip of fabric for an empty layout
    let fabric_length = match layout.required_length > 0.0 {
        true => layout.required_length,
        false => 1.0,
    };
    let fabric_rect = Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: fabric_width,
        y_max: fabric_length,
    };
    let vbox = fabric_rect.scale(1.15);

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * colors.stroke_width_multiplier;
    let font_size = f64::min(vbox.width(), vbox.height()) * 0.025;

    let fabric_group = {
        let title = Title::new(format!(
            "fabric, width: {:.2}, required length: {:.2}, cut allowance: {:.2}",
            fabric_width, layout.required_length, layout.fabric.cut_allowance
        ));
        let rect = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", fabric_width)
            .set("height", fabric_length)
            .set("fill", colors.fabric_fill)
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width);
        let width_caption = Text::new(format!("{fabric_width:.2} cm (fabric width)"))
            .set("x", fabric_width / 2.0)
            .set("y", -font_size * 0.5)
            .set("text-anchor", "middle")
            .set("font-size", font_size)
            .set("fill", colors.text_fill);
        let length_caption = Text::new(format!(
            "{:.2} cm (required length)",
            layout.required_length
        ))
        .set("x", -font_size * 0.5)
        .set("y", fabric_length / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", font_size)
        .set("fill", colors.text_fill)
        .set(
            "transform",
            format!(
                "rotate(-90 {} {})",
                -font_size * 0.5,
                fabric_length / 2.0
            ),
        );
        Group::new()
            .set("id", "fabric")
            .add(rect)
            .add(title)
            .add(width_caption)
            .add(length_caption)
    };

    let panels_group = {
        //define every panel once in its reference position, place it with a transform
        let mut defs = Definitions::new();
        let mut group = Group::new().set("id", "panels");
        for placement in &layout.placements {
            let panel = &placement.panel;
            let fill = svg_util::panel_fill(&colors, panel.id);
            let stroke = format!("{stroke_width}");
            let mut panel_def = Group::new()
                .set("id", format!("panel_{}", panel.id))
                .add(svg_util::trapezoid_polygon(
                    &panel.outline(),
                    1.0,
                    &[
                        ("fill", fill.as_str()),
                        ("stroke", "#555555"),
                        ("stroke-width", stroke.as_str()),
                        ("opacity", "0.9"),
                    ],
                ));
            if options.draw_labels {
                panel_def = panel_def.add(
                    Text::new(format!("P{}", panel.id))
                        .set("x", placement.width() / 2.0)
                        .set("y", placement.height() / 2.0)
                        .set("text-anchor", "middle")
                        .set("font-size", font_size)
                        .set("fill", colors.text_fill),
                );
            }
            defs = defs.add(panel_def);

            let title = Title::new(format!(
                "panel {}, row {}, transf: [{}]",
                panel.id,
                placement.row,
                placement.d_transf()
            ));
            group = group.add(
                Use::new()
                    .set("transform", svg_util::transform_to_svg(placement.d_transf(), 1.0))
                    .set("href", format!("#panel_{}", panel.id))
                    .add(title),
            );
        }
        Group::new().add(defs).add(group)
    };

    let guides_group = match options.draw_row_guides {
        false => None,
        true => {
            let stroke = format!("{stroke_width}");
            let dash = format!("{}", 5.0 * stroke_width);
            let guides = layout.rows.iter().fold(
                Group::new().set("id", "row_guides"),
                |g, row| {
                    let y = row.y + row.height;
                    g.add(svg_util::line(
                        (0.0, y),
                        (fabric_width, y),
                        &[
                            ("stroke", "black"),
                            ("stroke-width", stroke.as_str()),
                            ("stroke-dasharray", dash.as_str()),
                            ("stroke-opacity", "0.6"),
                        ],
                    ))
                },
            );
            Some(guides)
        }
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let background = Rectangle::new()
        .set("x", vbox.x_min)
        .set("y", vbox.y_min)
        .set("width", vbox.width())
        .set("height", vbox.height())
        .set("fill", colors.background_fill);

    let document = Document::new()
        .set("viewBox", vbox_svg)
        .add(background)
        .add(fabric_group)
        .add(panels_group);

    match guides_group {
        Some(guides) => document.add(guides),
        None => document,
    }
}
