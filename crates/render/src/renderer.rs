use std::fmt::Write;
use wumpus_common::Coord;
use wumpus_kernel::{Status, World};

/// What the renderer is allowed to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderView {
    /// Show the wumpus, pits, and gold. Off for the player's view.
    pub reveal: bool,
}

impl RenderView {
    pub fn player() -> Self {
        Self { reveal: false }
    }

    pub fn revealed() -> Self {
        Self { reveal: true }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view configuration, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render the current world state under the given view.
    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// Plain-text board followed by score, arrows, and perceptions.
///
/// ```text
///     0  1  2  3
///  0  A  .  .  .
///  1  .  .  .  .
/// ```
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn cell(world: &World, view: &RenderView, at: Coord) -> &'static str {
        if at == world.agent() {
            return if world.has_gold() { "A*" } else { "A" };
        }
        if !view.reveal {
            return ".";
        }
        if world.wumpus() == Some(at) {
            "W"
        } else if world.pits().contains(&at) {
            "P"
        } else if world.gold() == at && !world.has_gold() {
            "G"
        } else {
            "."
        }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &RenderView) -> String {
        let size = world.size();
        let mut out = String::new();

        out.push_str("   ");
        for col in 0..size {
            let _ = write!(out, "{col:>3}");
        }
        out.push('\n');

        for row in 0..size {
            let _ = write!(out, "{row:>3}");
            for col in 0..size {
                let _ = write!(out, "{:>3}", Self::cell(world, view, Coord::new(row, col)));
            }
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "Score: {}  Arrows: {}  Gold: {}",
            world.score(),
            world.arrows(),
            if world.has_gold() { "carried" } else { "not found" }
        );
        let _ = writeln!(out, "Perceptions: {}", world.perceptions());
        match world.status() {
            Status::Active => {}
            Status::Dead => out.push_str("Game over: you died.\n"),
            Status::Won => out.push_str("Game over: you escaped with the gold!\n"),
        }
        out
    }
}
