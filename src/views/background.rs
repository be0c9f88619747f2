// Diagonal pink-to-purple backdrop behind the card.

use eframe::egui::epaint::{Mesh, Vertex};
use eframe::egui::{self, Color32};

use crate::ui_constants::palette;

pub fn paint_gradient(painter: &egui::Painter, rect: egui::Rect) {
    let from = palette::PINK_100;
    let to = palette::PURPLE_100;
    let mid = lerp_color(from, to, 0.5);

    let mut mesh = Mesh::default();
    for (pos, color) in [
        (rect.left_top(), from),
        (rect.right_top(), mid),
        (rect.right_bottom(), to),
        (rect.left_bottom(), mid),
    ] {
        mesh.vertices.push(Vertex {
            pos,
            uv: egui::pos2(0.0, 0.0),
            color,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}
