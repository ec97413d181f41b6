//! Image acquisition
//!
//! File reads complete asynchronously and may finish out of order. Every
//! read is issued an [`ImageTicket`]; only the newest ticket for a slot is
//! allowed to commit, so a slow earlier read can never overwrite a newer
//! selection.
//!
//! The second half of the module turns raw file bytes into a data URI,
//! shrinking oversized photos first.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::{CardError, CardResult};

/// Longest edge kept for embedded photos
pub const MAX_EMBED_EDGE: u32 = 1024;

/// Where an acquired image lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Avatar,
    Background,
}

impl ImageSlot {
    fn index(self) -> usize {
        match self {
            ImageSlot::Avatar => 0,
            ImageSlot::Background => 1,
        }
    }
}

/// Token for one in-flight image read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket {
    pub slot: ImageSlot,
    seq: u64,
}

/// Monotonic ticket issuer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRequests {
    next_seq: u64,
    latest: [Option<u64>; 2],
}

impl ImageRequests {
    /// Start a new read for `slot`, superseding any earlier one
    pub fn issue(&mut self, slot: ImageSlot) -> ImageTicket {
        self.next_seq += 1;
        self.latest[slot.index()] = Some(self.next_seq);
        ImageTicket {
            slot,
            seq: self.next_seq,
        }
    }

    /// Whether `ticket` is still the newest for its slot
    pub fn is_current(&self, ticket: ImageTicket) -> bool {
        self.latest[ticket.slot.index()] == Some(ticket.seq)
    }

    /// Consume `ticket` if it is current. A ticket commits at most once.
    pub fn redeem(&mut self, ticket: ImageTicket) -> bool {
        if self.is_current(ticket) {
            self.latest[ticket.slot.index()] = None;
            true
        } else {
            debug!(slot = ?ticket.slot, seq = ticket.seq, "discarding stale image read");
            false
        }
    }

    /// Drop the outstanding read for `slot` (used when the image is deleted)
    pub fn cancel(&mut self, slot: ImageSlot) {
        self.latest[slot.index()] = None;
    }
}

/// Encode raw bytes as a data URI, sniffing the MIME type from the content
pub fn encode_data_uri(bytes: &[u8]) -> CardResult<String> {
    let format = image::guess_format(bytes).map_err(|e| CardError::Image(e.to_string()))?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Prepare a picked file for embedding on the card.
///
/// Animated GIFs are embedded untouched. Other formats are decoded to make
/// sure they are real images and downscaled when either edge exceeds
/// `max_edge`.
pub fn prepare_image(bytes: &[u8], max_edge: u32) -> CardResult<String> {
    let format = image::guess_format(bytes).map_err(|e| CardError::Image(e.to_string()))?;
    if format == ImageFormat::Gif {
        return encode_data_uri(bytes);
    }

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CardError::Image(e.to_string()))?;
    let (width, height) = img.dimensions();
    if width.max(height) <= max_edge {
        return encode_data_uri(bytes);
    }

    let resized = img.resize(max_edge, max_edge, FilterType::Lanczos3);
    debug!(
        from = ?(width, height),
        to = ?resized.dimensions(),
        "downscaled picked image"
    );

    let (out_format, out_image) = match format {
        ImageFormat::Jpeg => (ImageFormat::Jpeg, DynamicImage::ImageRgb8(resized.to_rgb8())),
        _ => (ImageFormat::Png, resized),
    };

    let mut buffer = Vec::new();
    out_image
        .write_to(&mut Cursor::new(&mut buffer), out_format)
        .map_err(|e| CardError::Image(e.to_string()))?;
    encode_data_uri(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn decode_uri(uri: &str) -> DynamicImage {
        let payload = uri.split_once(";base64,").unwrap().1;
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn newest_ticket_wins() {
        let mut requests = ImageRequests::default();
        let first = requests.issue(ImageSlot::Avatar);
        let second = requests.issue(ImageSlot::Avatar);

        // second read finishes first
        assert!(requests.redeem(second));
        // first read finishes later and must not overwrite
        assert!(!requests.redeem(first));
    }

    #[test]
    fn slow_first_read_loses_even_when_it_lands_first() {
        let mut requests = ImageRequests::default();
        let first = requests.issue(ImageSlot::Background);
        let second = requests.issue(ImageSlot::Background);

        assert!(!requests.redeem(first));
        assert!(requests.redeem(second));
    }

    #[test]
    fn slots_are_independent() {
        let mut requests = ImageRequests::default();
        let avatar = requests.issue(ImageSlot::Avatar);
        let background = requests.issue(ImageSlot::Background);
        assert!(requests.redeem(avatar));
        assert!(requests.redeem(background));
    }

    #[test]
    fn ticket_commits_once() {
        let mut requests = ImageRequests::default();
        let ticket = requests.issue(ImageSlot::Avatar);
        assert!(requests.redeem(ticket));
        assert!(!requests.redeem(ticket));
    }

    #[test]
    fn cancel_invalidates_outstanding_read() {
        let mut requests = ImageRequests::default();
        let ticket = requests.issue(ImageSlot::Avatar);
        requests.cancel(ImageSlot::Avatar);
        assert!(!requests.redeem(ticket));
    }

    #[test]
    fn data_uri_has_sniffed_mime() {
        let uri = encode_data_uri(&png_bytes(2, 2)).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn non_image_bytes_rejected() {
        assert!(matches!(
            encode_data_uri(b"definitely not an image"),
            Err(CardError::Image(_))
        ));
        assert!(prepare_image(b"plain text", MAX_EMBED_EDGE).is_err());
    }

    #[test]
    fn small_image_embedded_unchanged() {
        let bytes = png_bytes(16, 8);
        let uri = prepare_image(&bytes, MAX_EMBED_EDGE).unwrap();
        assert_eq!(uri, encode_data_uri(&bytes).unwrap());
    }

    #[test]
    fn large_image_downscaled_keeping_aspect() {
        let uri = prepare_image(&png_bytes(400, 200), 100).unwrap();
        assert_eq!(decode_uri(&uri).dimensions(), (100, 50));
    }
}
