pub(crate) struct UiActor {
    needs_redraw: bool,
    spinner_frame: usize,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self {
            needs_redraw: true,
            spinner_frame: 0,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn needs_redraw_mut(&mut self) -> &mut bool {
        &mut self.needs_redraw
    }

    pub(crate) fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub(crate) fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.needs_redraw = true;
    }
}
