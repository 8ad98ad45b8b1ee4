//! Browser glue for the Yinsh board.
//!
//! Mounts a square canvas sized from the viewport at load, draws the board
//! lines once, and resolves mouse clicks to board intersections. All real
//! logic lives in [`geometry`]; this module only owns the canvas, the 2d
//! context, and the click-highlight decoration on top of the static grid.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

pub mod geometry;
pub mod palette;

use geometry::{BoardGrid, Point};

/// Fraction of the viewport height used as the square canvas edge.
const VIEWPORT_FRACTION: f64 = 0.75;

/// Runtime canvas state. The grid is computed once at mount and never
/// mutated afterwards; only the current selection changes on clicks.
struct BoardState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    grid: BoardGrid,
    selected: Option<(usize, usize)>,
}

thread_local! {
    static BOARD_STATE: std::cell::RefCell<Option<BoardState>> = std::cell::RefCell::new(None);
}

/// Create (or reuse) the board canvas, compute the grid, draw the board and
/// attach the click listener. Called once from `start_game()`.
#[wasm_bindgen]
pub fn mount_board() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Edge length comes from the viewport height at load; later viewport
    // changes do not resize the board.
    let viewport_h = win.inner_height()?.as_f64().unwrap_or(0.0);
    let edge = (viewport_h * VIEWPORT_FRACTION).floor();

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("yinsh-board") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("yinsh-board");
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(edge as u32);
    canvas.set_height(edge as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let grid = BoardGrid::new(edge);
    draw_board(&ctx, &grid);

    // Click -> hit-test -> highlight ring. offset_x/offset_y are already
    // canvas-local, so no bounding-rect arithmetic is needed here.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let p = Point::new(evt.offset_x() as f64, evt.offset_y() as f64);
            BOARD_STATE.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    // A miss is a valid no-selection result; keep the current
                    // selection rather than clearing it.
                    if let Some(hit) = state.grid.hit_test(p) {
                        state.selected = Some(hit);
                        redraw(state);
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    BOARD_STATE.with(|cell| {
        cell.replace(Some(BoardState {
            canvas,
            ctx,
            grid,
            selected: None,
        }))
    });
    Ok(())
}

/// Debug overlay: ring every intersection in its row color and wash the two
/// marker rows, as in the original prototype. Exposed to JS so it can be
/// toggled from the console.
#[wasm_bindgen]
pub fn draw_intersection_overlay() {
    BOARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow().as_ref() {
            overlay(&state.ctx, &state.grid);
        }
    });
}

fn redraw(state: &BoardState) {
    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;
    state.ctx.clear_rect(0.0, 0.0, w, h);
    draw_board(&state.ctx, &state.grid);
    if let Some((i, j)) = state.selected {
        if let Some(p) = state.grid.get(i, j) {
            highlight_ring(&state.ctx, p, state.grid.altitude() / 2.0);
        }
    }
}

fn draw_board(ctx: &CanvasRenderingContext2d, grid: &BoardGrid) {
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(1.0);
    for (a, b) in grid.lines() {
        line(ctx, a.x, a.y, b.x, b.y);
    }
}

fn highlight_ring(ctx: &CanvasRenderingContext2d, p: Point, radius: f64) {
    ctx.set_stroke_style_str("#000000");
    ctx.begin_path();
    ctx.arc(p.x, p.y, radius, 0.0, std::f64::consts::TAU).ok();
    ctx.stroke();
}

fn overlay(ctx: &CanvasRenderingContext2d, grid: &BoardGrid) {
    for (i, j, p) in grid.intersections() {
        ctx.begin_path();
        ctx.set_stroke_style_str(palette::ROW_COLORS[i]);
        ctx.arc(p.x, p.y, 10.0, 0.0, std::f64::consts::TAU).ok();
        ctx.stroke();
        if let Some(wash) = palette::row_wash(j) {
            ctx.set_global_alpha(0.5);
            ctx.set_fill_style_str(wash);
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }
    }
    ctx.set_stroke_style_str("#000000");
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
