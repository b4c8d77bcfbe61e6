use std::f64::consts::PI;

use shared::render::{
    draw_wheel, label_font_size, polar, radial_label_rotation, segment_arcs, short_label,
    WheelFrame, WheelRenderer, LABEL_RADIUS,
};
use shared::segment::{Segment, SegmentLayout};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

/// Draws wheel frames onto a 2d canvas context.
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    size: f64,
    dark_mode: bool,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d, size: f64, dark_mode: bool) -> Self {
        Self { context, size, dark_mode }
    }

    /// Looks up the canvas' 2d context, or `None` if the browser refuses one.
    pub fn for_canvas(canvas: &HtmlCanvasElement, dark_mode: bool) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let size = canvas.width().min(canvas.height()) as f64;
        Some(Self::new(context, size, dark_mode))
    }

    fn center(&self) -> f64 {
        self.size / 2.0
    }

    fn radius(&self) -> f64 {
        self.size / 2.0 - 20.0
    }

    fn draw_backdrop(&self, spinning: bool) {
        let ctx = &self.context;
        let c = self.center();
        let radius = self.radius();

        ctx.clear_rect(0.0, 0.0, self.size, self.size);

        let glow_intensity = if spinning { 0.25 } else { 0.15 };
        ctx.begin_path();
        if self.dark_mode {
            ctx.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
        } else {
            ctx.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
        }
        let _ = ctx.arc(c, c, radius + 15.0, 0.0, 2.0 * PI);
        ctx.fill();

        ctx.begin_path();
        ctx.set_fill_style_str(if self.dark_mode { "#1a1c2e" } else { "#f0f2ff" });
        let _ = ctx.arc(c, c, radius, 0.0, 2.0 * PI);
        ctx.fill();
    }

    fn draw_hub(&self) {
        let ctx = &self.context;
        let c = self.center();
        let hub_radius = self.radius() * 0.12;

        ctx.begin_path();
        ctx.set_fill_style_str(if self.dark_mode { "#2d3142" } else { "#ffffff" });
        let _ = ctx.arc(c, c, hub_radius, 0.0, 2.0 * PI);
        ctx.fill();

        ctx.set_stroke_style_str(if self.dark_mode { "rgba(0, 0, 0, 0.5)" } else { "rgba(0, 0, 0, 0.2)" });
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}

/// Canvas arcs start at 3 o'clock; wheel angles start at the top.
fn canvas_radians(angle: f64) -> f64 {
    (angle - 90.0).to_radians()
}

impl WheelRenderer for CanvasRenderer {
    type Output = ();

    fn render_segments(&mut self, frame: &WheelFrame<'_>) {
        self.draw_backdrop(frame.spinning);

        let ctx = &self.context;
        let c = self.center();
        let radius = self.radius();
        let font_size = label_font_size(self.size, frame.segments.len());

        ctx.save();
        let _ = ctx.translate(c, c);
        let _ = ctx.rotate(frame.rotation.to_radians());
        let _ = ctx.translate(-c, -c);

        let arcs = segment_arcs(frame.segments, frame.layout);
        for arc in &arcs {
            let segment = &frame.segments[arc.index];
            ctx.begin_path();
            ctx.set_fill_style_str(&segment.color);
            if arc.is_full_circle() {
                let _ = ctx.arc(c, c, radius, 0.0, 2.0 * PI);
            } else {
                ctx.move_to(c, c);
                let _ = ctx.arc(c, c, radius, canvas_radians(arc.start), canvas_radians(arc.end));
                ctx.close_path();
            }
            ctx.fill();

            ctx.set_stroke_style_str(if self.dark_mode {
                "rgba(255, 255, 255, 0.7)"
            } else {
                "rgba(255, 255, 255, 0.9)"
            });
            ctx.set_line_width(2.0);
            ctx.stroke();
        }

        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font(&format!("bold {:.0}px 'Segoe UI', Roboto, system-ui, sans-serif", font_size));
        ctx.set_shadow_color(if self.dark_mode { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
        ctx.set_shadow_blur(3.0);
        ctx.set_shadow_offset_x(1.0);
        ctx.set_shadow_offset_y(1.0);

        for arc in &arcs {
            let label = short_label(&frame.segments[arc.index].label);
            let (x, y) = polar(c, c, radius * LABEL_RADIUS, arc.mid());
            ctx.save();
            let _ = ctx.translate(x, y);
            let _ = ctx.rotate(radial_label_rotation(arc.mid()).to_radians());
            let _ = ctx.fill_text(&label, 0.0, 0.0);
            ctx.restore();
        }

        ctx.set_shadow_color("rgba(0, 0, 0, 0)");
        ctx.set_shadow_blur(0.0);
        ctx.set_shadow_offset_x(0.0);
        ctx.set_shadow_offset_y(0.0);

        ctx.restore();
        self.draw_hub();
    }

    fn render_pointer(&mut self, frame: &WheelFrame<'_>) {
        let ctx = &self.context;
        let c = self.center();
        let radius = self.radius();

        // Outer ring
        ctx.begin_path();
        ctx.set_stroke_style_str(if self.dark_mode {
            "rgba(180, 130, 255, 0.5)"
        } else {
            "rgba(130, 100, 255, 0.5)"
        });
        ctx.set_line_width(if frame.spinning { 5.0 } else { 4.0 });
        let _ = ctx.arc(c, c, radius - 2.0, 0.0, 2.0 * PI);
        ctx.stroke();

        ctx.set_shadow_color(if frame.spinning {
            "rgba(255, 215, 130, 0.8)"
        } else {
            "rgba(255, 215, 0, 0.6)"
        });
        ctx.set_shadow_blur(if frame.spinning { 10.0 } else { 4.0 });

        // Rounded triangle pointing down at the wheel
        let pointer_width = 20.0;
        let pointer_height = 30.0;
        let corner = 5.0;
        let tip_y = c - radius + 12.0;
        let top_y = c - radius - pointer_height + 12.0;

        ctx.begin_path();
        ctx.move_to(c, tip_y);
        ctx.line_to(c - pointer_width + corner, top_y + corner);
        ctx.quadratic_curve_to(c - pointer_width, top_y + corner, c - pointer_width, top_y);
        ctx.line_to(c + pointer_width - corner, top_y);
        ctx.quadratic_curve_to(c + pointer_width, top_y, c + pointer_width, top_y + corner);
        ctx.close_path();
        ctx.set_fill_style_str(if frame.spinning { "#ffd700" } else { "#f59e0b" });
        ctx.fill();
        ctx.set_stroke_style_str("#e69500");
        ctx.set_line_width(1.5);
        ctx.stroke();

        ctx.set_shadow_color("rgba(0, 0, 0, 0)");
        ctx.set_shadow_blur(0.0);
    }

    fn finish(self) {}
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    #[prop_or_default]
    pub layout: SegmentLayout,
    pub rotation: f64,
    pub is_spinning: bool,
    #[prop_or(450)]
    pub size: u32,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.segments.clone(), props.layout, props.rotation, props.is_spinning),
            move |(segments, layout, rotation, is_spinning)| {
                let renderer = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| CanvasRenderer::for_canvas(&canvas, is_dark_mode()));
                if let Some(renderer) = renderer {
                    let frame = WheelFrame {
                        segments,
                        layout: *layout,
                        rotation: *rotation,
                        spinning: *is_spinning,
                    };
                    draw_wheel(renderer, &frame);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={props.size.to_string()}
                height={props.size.to_string()}
                class="w-full h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
