//! Browser canvas backend

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Sprite, Surface};
use crate::sim::Rect;

/// Canvas 2D context plus the two sprite images
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    ship: HtmlImageElement,
    invader: HtmlImageElement,
}

impl CanvasSurface {
    /// Wrap a context and start loading the sprites. Loading is not awaited;
    /// frames drawn before an image arrives simply leave it out.
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Result<Self, JsValue> {
        Ok(Self {
            ctx,
            size: Vec2::new(width, height),
            ship: load_image(Sprite::Ship)?,
            invader: load_image(Sprite::Invader)?,
        })
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Ship => &self.ship,
            Sprite::Invader => &self.invader,
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }
}

fn load_image(sprite: Sprite) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(sprite.path());
    log::info!("Loading sprite {:?} from {}", sprite, sprite.path());
    Ok(image)
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        let image = self.image(sprite);
        if !image.complete() || image.natural_width() == 0 {
            return;
        }
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.circle_path(center, radius);
        self.ctx.stroke();
    }
}
