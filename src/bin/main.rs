#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    spi::master::Spi,
    time::Rate,
    timer::timg::TimerGroup,
};
use log::{LevelFilter, error, info};
use static_cell::StaticCell;

use cuecard_board::{
    display::{Frame, SharpPanel},
    indicator::StatusLed,
    input::{ButtonPair, ButtonsConfig},
    render::{FrameRenderer, NotesRenderer},
};
use cuecard_core::{
    app::{PresenterApp, TickResult},
    config::PresenterConfig,
    deck::{Deck, parse_deck},
};

const DISPLAY_SPI_HZ: u32 = 1_000_000;
const BUTTON_DEBOUNCE_POLLS: u8 = 4;
const TICK_INTERVAL_MS: u64 = 2;

/// Deck source baked into the image; swap the file and reflash to
/// change talks.
const DECK_SOURCE: &str = include_str!("../../decks/demo.json");

static DECK: StaticCell<Deck> = StaticCell::new();

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: cuecard starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Status LED on GPIO21, active low. Driven off once at boot.
    let mut led = StatusLed::new(
        Output::new(peripherals.GPIO21, Level::High, OutputConfig::default()),
        true,
    );
    let _ = led.off();

    // Panel wiring: SCK=GPIO13, MOSI=GPIO14, CS=GPIO15, DISP=GPIO2.
    // EXTCOMIN is tied to GND; VCOM alternates in software.
    let disp = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO15, Level::Low, OutputConfig::default());

    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(DISPLAY_SPI_HZ))
        // LS027B7DH01 uses CPOL=0, CPHA=1.
        .with_mode(esp_hal::spi::Mode::_1);

    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO13)
        .with_mosi(peripherals.GPIO14);

    let mut delay = Delay::new();

    let mut panel = SharpPanel::new(spi, disp, cs);
    let mut display_fault_logged = false;
    if let Err(err) = panel.initialize(&mut delay) {
        info!("display initialize failed: {:?}", err);
        display_fault_logged = true;
    }
    if let Err(err) = panel.clear_all(&mut delay) {
        info!("display clear failed: {:?}", err);
        display_fault_logged = true;
    }

    // Button wiring: ADVANCE=GPIO10, RETREAT=GPIO11, both switch to GND.
    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let advance_pin = Input::new(peripherals.GPIO10, input_cfg);
    let retreat_pin = Input::new(peripherals.GPIO11, input_cfg);

    let buttons = ButtonPair::new(
        advance_pin,
        retreat_pin,
        ButtonsConfig::default().with_debounce_polls(BUTTON_DEBOUNCE_POLLS),
    )
    .unwrap();

    // A bad deck is a refusal to start, not a blank presenter.
    let deck: &'static Deck = match parse_deck(DECK_SOURCE) {
        Ok(deck) => DECK.init(deck),
        Err(err) => {
            error!("deck: load failed: {:?}; not entering event loop", err);
            loop {
                Timer::after_secs(1).await;
            }
        }
    };

    let mut app = PresenterApp::new(deck, buttons, PresenterConfig::default());
    let mut renderer = NotesRenderer::new();
    let mut frame = Frame::new();

    info!("deck: {} slides loaded", deck.len());
    info!("display pins: SCK=GPIO13 MOSI=GPIO14 CS=GPIO15 DISP=GPIO2");
    info!("button pins: ADVANCE=GPIO10 RETREAT=GPIO11 LED=GPIO21");

    loop {
        if app.tick() == TickResult::RenderRequested {
            app.with_screen(|screen| renderer.render(screen, &mut frame));

            if let Err(err) = panel.flush_frame(&frame, &mut delay)
                && !display_fault_logged
            {
                info!("display flush failed: {:?}", err);
                display_fault_logged = true;
            }
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}
