use crate::core::{frames_for, ParticleField};
use instant::Instant;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<ParticleField>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(ctx: web::CanvasRenderingContext2d, field: Rc<RefCell<ParticleField>>) -> Self {
        Self {
            ctx,
            field,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let frames = frames_for((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        let mut field = self.field.borrow_mut();
        let bounds = field.bounds();
        self.ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        field.step(frames);
        for p in &field.particles {
            self.ctx.begin_path();
            self.ctx.set_fill_style_str(&p.fill_style());
            // arc only fails on a negative radius
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
