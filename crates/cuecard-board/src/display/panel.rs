//! Board-level adapter for the Sharp LS027B7DH01 over SPI.
//!
//! The panel latches data while CS is high. Each flush alternates the
//! VCOM bit embedded in the command word; the controller requires that
//! polarity to keep moving or the liquid crystal degrades.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::frame::{Frame, HEIGHT, LINE_BYTES};

const CS_SETUP_NS: u32 = 3_000;
const CS_HOLD_NS: u32 = 1_000;
const CLEAR_HOLD_NS: u32 = 220_000;

const CMD_WRITE: u8 = 0x80;
const CMD_CLEAR: u8 = 0x20;
const VCOM_BIT: u8 = 0x40;

/// Wire gate address (`AG0..AG7`) for line 1..=240, sent LSB first.
#[inline]
pub fn encode_line_address(line: u16) -> Option<u8> {
    if !(1..=HEIGHT as u16).contains(&line) {
        return None;
    }

    Some((line as u8).reverse_bits())
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PanelError<SpiErr, DispErr, CsErr> {
    Spi(SpiErr),
    Disp(DispErr),
    Cs(CsErr),
    Protocol,
}

type PanelResult<SpiErr, DispErr, CsErr> = Result<(), PanelError<SpiErr, DispErr, CsErr>>;

/// Sharp memory LCD behind an `SpiBus` plus DISP/CS pins. EXTCOMIN is
/// strapped low; VCOM alternates in software via the command word.
#[derive(Debug)]
pub struct SharpPanel<SPI, DISP, CS> {
    spi: SPI,
    disp: DISP,
    cs: CS,
    vcom_high: bool,
}

impl<SPI, DISP, CS> SharpPanel<SPI, DISP, CS>
where
    SPI: SpiBus<u8>,
    DISP: OutputPin,
    CS: OutputPin,
{
    pub fn new(spi: SPI, disp: DISP, cs: CS) -> Self {
        Self {
            spi,
            disp,
            cs,
            vcom_high: false,
        }
    }

    /// Enables display output and settles the pins.
    pub fn initialize<D>(&mut self, delay: &mut D) -> PanelResult<SPI::Error, DISP::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.disp.set_high().map_err(PanelError::Disp)?;
        self.cs.set_low().map_err(PanelError::Cs)?;

        delay.delay_us(60);
        Ok(())
    }

    /// Issues the all-clear command and holds CS as the panel requires.
    pub fn clear_all<D>(&mut self, delay: &mut D) -> PanelResult<SPI::Error, DISP::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.vcom_high = !self.vcom_high;
        let command = CMD_CLEAR | if self.vcom_high { VCOM_BIT } else { 0x00 };

        self.cs.set_high().map_err(PanelError::Cs)?;
        delay.delay_ns(CS_SETUP_NS);

        self.spi
            .write(&[command, 0x00, 0x00])
            .map_err(PanelError::Spi)?;
        self.spi.flush().map_err(PanelError::Spi)?;

        delay.delay_ns(CLEAR_HOLD_NS);
        self.cs.set_low().map_err(PanelError::Cs)?;

        Ok(())
    }

    /// Flushes a full frame in one CS-high transaction.
    pub fn flush_frame<D>(
        &mut self,
        frame: &Frame,
        delay: &mut D,
    ) -> PanelResult<SPI::Error, DISP::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.vcom_high = !self.vcom_high;
        let command = CMD_WRITE | if self.vcom_high { VCOM_BIT } else { 0x00 };

        self.cs.set_high().map_err(PanelError::Cs)?;
        delay.delay_ns(CS_SETUP_NS);

        self.spi.write(&[command]).map_err(PanelError::Spi)?;

        // [address][50 data bytes][dummy]
        let mut packet = [0u8; LINE_BYTES + 2];
        for line in 1..=HEIGHT as u16 {
            packet[0] = encode_line_address(line).ok_or(PanelError::Protocol)?;
            let data = frame.line(line).ok_or(PanelError::Protocol)?;
            packet[1..1 + LINE_BYTES].copy_from_slice(data);

            self.spi.write(&packet).map_err(PanelError::Spi)?;
        }

        // Frame trailer byte.
        self.spi.write(&[0x00]).map_err(PanelError::Spi)?;
        self.spi.flush().map_err(PanelError::Spi)?;

        delay.delay_ns(CS_HOLD_NS);
        self.cs.set_low().map_err(PanelError::Cs)?;

        Ok(())
    }
}
