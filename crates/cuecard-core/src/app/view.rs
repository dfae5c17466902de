impl<'d, IN> PresenterApp<'d, IN>
where
    IN: InputProvider,
{
    pub fn new(deck: &'d Deck, input: IN, config: PresenterConfig) -> Self {
        Self {
            deck,
            input,
            config,
            current_index: config.initial_slide,
            pending_redraw: true,
        }
    }

    /// Committed slide index. 0 is the blank state below the first
    /// valid slide number.
    pub fn current_index(&self) -> u16 {
        self.current_index
    }

    /// Drains pending input, applies it, and reports whether the
    /// display must redraw. Runs to completion before the next event
    /// is accepted; navigation needs no other synchronization.
    pub fn tick(&mut self) -> TickResult {
        self.process_inputs();

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// One render pass over the committed state: resolve the slide,
    /// wrap its notes, and hand the resulting screen to `f`. A lookup
    /// miss yields [`Screen::NoSlide`] and leaves the index untouched.
    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let mut label_buf = [0u8; 5];

        match self.deck.find_slide(self.current_index) {
            Some(slide) => {
                let layout = &self.config.layout;
                let mut plan = RenderPlan::new(layout.label_align);
                plan.label = TextLine {
                    text: slide_number_label(slide.number, &mut label_buf),
                    x: layout.label_origin.0,
                    y: layout.label_origin.1,
                };
                lay_out_slide(slide, layout, self.config.wrap, &mut plan);

                f(Screen::Notes { plan: &plan });
            }
            None => {
                debug!(
                    "render: no slide for index={} deck_len={}",
                    self.current_index,
                    self.deck.len()
                );
                f(Screen::NoSlide {
                    requested: self.current_index,
                    deck_empty: self.deck.is_empty(),
                });
            }
        }
    }
}
