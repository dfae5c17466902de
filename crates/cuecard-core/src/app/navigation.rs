impl<'d, IN> PresenterApp<'d, IN>
where
    IN: InputProvider,
{
    /// Steps toward the last slide; saturates at the slide count
    /// instead of wrapping. Always schedules a redraw.
    fn advance(&mut self) {
        if self.current_index < self.deck.len() {
            self.current_index += 1;
        }
        debug!(
            "nav: advance index={} of {}",
            self.current_index,
            self.deck.len()
        );
        self.pending_redraw = true;
    }

    /// Steps back one slide. The floor is 0, one below the first valid
    /// slide number; that state renders as no-slide. Always schedules
    /// a redraw.
    fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        debug!(
            "nav: retreat index={} of {}",
            self.current_index,
            self.deck.len()
        );
        self.pending_redraw = true;
    }
}
