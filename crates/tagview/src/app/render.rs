use super::App;

impl App {
    /// Draws one frame of the viewer into the window.
    pub(super) fn render(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if let Err(e) = self.viewer.render(engine) {
            self.fail(e);
        }
    }
}
