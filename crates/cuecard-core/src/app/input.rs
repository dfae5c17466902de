impl<'d, IN> PresenterApp<'d, IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider fault; remaining events dropped this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Advance => self.advance(),
            InputEvent::Retreat => self.retreat(),
        }
    }
}
