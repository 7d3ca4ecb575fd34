use std::io::{self, Write};

use citycast_core::{Transition, ViewModel, WeatherView};

/// Renders view models as plain lines on a writer (stdout by default).
#[derive(Debug)]
pub struct TerminalView<W = io::Stdout> {
    out: W,
}

impl TerminalView {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalView<W> {
    #[cfg(test)]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, model: &ViewModel) -> io::Result<()> {
        if model.busy_visible {
            writeln!(self.out, "{}", model.trigger_label)?;
        }

        if !model.message.is_empty() {
            writeln!(self.out, "{}", model.message)?;
        }

        if let Some(panel) = &model.panel {
            if model.transition == Transition::FadeIn {
                writeln!(self.out)?;
            }
            writeln!(self.out, "{}  {}", panel.icon.glyph(), panel.city_name)?;
            writeln!(self.out, "   {}  {}", panel.temperature, panel.condition)?;
        }

        self.out.flush()
    }
}

impl<W: Write + Send> WeatherView for TerminalView<W> {
    fn render(&mut self, model: &ViewModel) {
        if let Err(err) = self.draw(model) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}
