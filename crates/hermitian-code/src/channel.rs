// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Byte transport over a Hermitian code.
//!
//! [`SymbolPacker`] maps bytes to field symbols for fields of characteristic two whose
//! degree divides eight. Each byte is written as eight bits, most significant first, and
//! cut into chunks of `degree` bits; bit `k` of a chunk is the coefficient of `w^k`.
//!
//! [`NoisyChannel`] corrupts symbols at random and [`transmit_text`] ties both to a code.

use crate::code::HermitianCode;
use crate::errors::{HermitianCodeError, HermitianCodeResult};
use crate::field::{FieldElement, GaloisField};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Byte used to pad the final block of a transmission
pub const PADDING_BYTE: u8 = b'~';
/// Byte emitted for every byte of a block that could not be decoded
pub const PLACEHOLDER_BYTE: u8 = b'_';

/// Packs bytes into field symbols and back.
#[derive(Debug, Clone)]
pub struct SymbolPacker {
    field: GaloisField,
    bits_per_symbol: usize,
}

impl SymbolPacker {
    pub fn new(field: &GaloisField) -> HermitianCodeResult<Self> {
        if field.characteristic() != 2 {
            return Err(HermitianCodeError::InvalidArgument {
                message: format!(
                    "Field must be an extension of GF(2), got characteristic {}",
                    field.characteristic()
                ),
            });
        }
        let bits_per_symbol = field.degree() as usize;
        if 8 % bits_per_symbol != 0 {
            return Err(HermitianCodeError::InvalidArgument {
                message: format!(
                    "Byte length is not adjusted to field size: {} bits per symbol",
                    bits_per_symbol
                ),
            });
        }
        Ok(Self {
            field: field.clone(),
            bits_per_symbol,
        })
    }

    pub fn bits_per_symbol(&self) -> usize {
        self.bits_per_symbol
    }

    pub fn symbols_per_byte(&self) -> usize {
        8 / self.bits_per_symbol
    }

    pub fn bytes_to_symbols(&self, bytes: &[u8]) -> HermitianCodeResult<Vec<FieldElement>> {
        let mut symbols = Vec::with_capacity(bytes.len() * self.symbols_per_byte());
        for &byte in bytes {
            let bits: Vec<u32> = (0..8).rev().map(|i| u32::from((byte >> i) & 1)).collect();
            for chunk in bits.chunks(self.bits_per_symbol) {
                symbols.push(self.field.from_coordinates(chunk)?);
            }
        }
        Ok(symbols)
    }

    pub fn symbols_to_bytes(&self, symbols: &[FieldElement]) -> HermitianCodeResult<Vec<u8>> {
        let per_byte = self.symbols_per_byte();
        if symbols.len() % per_byte != 0 {
            return Err(HermitianCodeError::InvalidArgument {
                message: format!(
                    "{} symbols do not fill whole bytes of {} symbols",
                    symbols.len(),
                    per_byte
                ),
            });
        }
        Ok(symbols
            .chunks(per_byte)
            .map(|group| {
                group
                    .iter()
                    .flat_map(|&s| self.field.coordinates(s))
                    .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
            })
            .collect())
    }
}

/// A channel adding a random non-zero error to each symbol with a fixed probability.
pub struct NoisyChannel<R: Rng> {
    rng: R,
    symbol_error_rate: f64,
}

impl<R: Rng> NoisyChannel<R> {
    pub fn new(rng: R, symbol_error_rate: f64) -> HermitianCodeResult<Self> {
        if !(0.0..=1.0).contains(&symbol_error_rate) {
            return Err(HermitianCodeError::InvalidArgument {
                message: format!("error rate {} is not a probability", symbol_error_rate),
            });
        }
        Ok(Self {
            rng,
            symbol_error_rate,
        })
    }

    /// Returns the corrupted word and the number of corrupted symbols.
    pub fn transmit(
        &mut self,
        field: &GaloisField,
        codeword: &[FieldElement],
    ) -> HermitianCodeResult<(Vec<FieldElement>, usize)> {
        let mut corrupted = 0;
        let mut word = Vec::with_capacity(codeword.len());
        for &symbol in codeword {
            if self.rng.gen_bool(self.symbol_error_rate) {
                let error = field.element(self.rng.gen_range(1..field.order()))?;
                word.push(field.add(symbol, error));
                corrupted += 1;
            } else {
                word.push(symbol);
            }
        }
        Ok((word, corrupted))
    }
}

/// Outcome of sending a byte string through a code and a noisy channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionReport {
    /// Received bytes, padding removed, failed blocks replaced by placeholders
    pub received: Vec<u8>,
    pub blocks: usize,
    pub failed_blocks: usize,
    pub corrupted_symbols: usize,
    pub corrected_symbols: usize,
}

/// Send `text` block by block through `code` and `channel`.
pub fn transmit_text<R: Rng>(
    code: &HermitianCode,
    channel: &mut NoisyChannel<R>,
    text: &[u8],
) -> HermitianCodeResult<TransmissionReport> {
    let packer = SymbolPacker::new(code.field())?;
    let block_bytes = code.k() / packer.symbols_per_byte();
    if block_bytes == 0 {
        return Err(HermitianCodeError::InvalidArgument {
            message: format!("code dimension {} cannot carry a whole byte", code.k()),
        });
    }

    let mut report = TransmissionReport {
        received: Vec::with_capacity(text.len()),
        blocks: 0,
        failed_blocks: 0,
        corrupted_symbols: 0,
        corrected_symbols: 0,
    };

    for chunk in text.chunks(block_bytes) {
        let mut block = chunk.to_vec();
        block.resize(block_bytes, PADDING_BYTE);

        let mut message = packer.bytes_to_symbols(&block)?;
        let payload = message.len();
        message.resize(code.k(), FieldElement::ZERO);

        let codeword = code.encode(&message)?;
        let (word, corrupted) = channel.transmit(code.field(), &codeword)?;
        report.blocks += 1;
        report.corrupted_symbols += corrupted;

        match code.decode_detailed(&word) {
            Ok(decoded) => {
                report.corrected_symbols += decoded.corrections.len();
                let bytes = packer.symbols_to_bytes(&decoded.message[..payload])?;
                report.received.extend_from_slice(&bytes[..chunk.len()]);
            }
            Err(e) if e.is_decoding() => {
                warn!(block = report.blocks, corrupted, "block could not be decoded");
                report.failed_blocks += 1;
                report
                    .received
                    .extend(std::iter::repeat(PLACEHOLDER_BYTE).take(chunk.len()));
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        blocks = report.blocks,
        failed = report.failed_blocks,
        corrupted = report.corrupted_symbols,
        "transmission finished"
    );
    Ok(report)
}
