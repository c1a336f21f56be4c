// crates/reactor-media/src/decode.rs
//
// first_frame: one-shot decode of the first video frame for target previews.
//
// Opens the container, takes the best video stream, feeds packets until the
// decoder yields a frame, converts it to RGBA through swscale and strips the
// stride padding. No seek: the preview is always the first decodable frame.

use std::path::Path;

use ffmpeg_the_third as ffmpeg;
use ffmpeg::format::{input, Pixel};
use ffmpeg::media::Type;
use ffmpeg::software::scaling::{context::Context as SwsContext, flag::Flags};

use reactor_core::{DecodeError, PreviewImage};

/// Largest preview edge. Frames bigger than this are scaled down on the way
/// to RGBA so a 4K target does not sit in the cache at full size.
pub const MAX_PREVIEW_EDGE: u32 = 1024;

pub fn first_frame(path: &Path) -> Result<PreviewImage, DecodeError> {
    let other = |e: ffmpeg::Error| DecodeError::Other { path: path.to_path_buf(), msg: e.to_string() };

    let mut ictx = input(path)
        .map_err(|e| DecodeError::Open { path: path.to_path_buf(), msg: e.to_string() })?;

    let (video_idx, mut decoder) = {
        let stream = ictx.streams().best(Type::Video)
            .ok_or_else(|| DecodeError::NoVideoStream { path: path.to_path_buf() })?;
        let ctx = ffmpeg::codec::context::Context::from_parameters(stream.parameters())
            .map_err(other)?;
        (stream.index(), ctx.decoder().video().map_err(other)?)
    };

    let (out_w, out_h) = preview_size(decoder.width(), decoder.height());
    if out_w == 0 || out_h == 0 {
        return Err(DecodeError::NoFrame { path: path.to_path_buf() });
    }

    let mut scaler = SwsContext::get(
        decoder.format(), decoder.width(), decoder.height(),
        Pixel::RGBA, out_w, out_h, Flags::BILINEAR,
    ).map_err(other)?;

    let mut decoded = ffmpeg::util::frame::video::Video::empty();
    let found = first_decoded(
        ictx.packets().map(|r| r.map(|(stream, packet)| (stream.index(), packet))),
        video_idx,
        |packet| {
            // A corrupt packet early in the file should not hide a good one later.
            decoder.send_packet(packet).ok()?;
            decoder.receive_frame(&mut decoded).ok()
        },
    ).map_err(other)?;
    if found.is_some() {
        return scale_to_preview(&mut scaler, &decoded, out_w, out_h, path);
    }

    // Flush: some codecs only emit the first frame after EOF.
    if decoder.send_eof().is_ok() && decoder.receive_frame(&mut decoded).is_ok() {
        return scale_to_preview(&mut scaler, &decoded, out_w, out_h, path);
    }

    Err(DecodeError::NoFrame { path: path.to_path_buf() })
}

/// Feed packets of stream `index` to `try_decode` until it yields a frame.
///
/// `Ok(None)` means the packets ran out first. A read error ends the scan:
/// the demuxer repeats a sticky I/O error forever, so skipping it would never
/// terminate.
fn first_decoded<P, E, T>(
    packets:        impl Iterator<Item = Result<(usize, P), E>>,
    index:          usize,
    mut try_decode: impl FnMut(&P) -> Option<T>,
) -> Result<Option<T>, E> {
    for result in packets {
        let (stream, packet) = result?;
        if stream != index { continue; }
        if let Some(frame) = try_decode(&packet) {
            return Ok(Some(frame));
        }
    }
    Ok(None)
}

fn scale_to_preview(
    scaler:  &mut SwsContext,
    decoded: &ffmpeg::util::frame::video::Video,
    out_w:   u32,
    out_h:   u32,
    path:    &Path,
) -> Result<PreviewImage, DecodeError> {
    let mut rgba = ffmpeg::util::frame::video::Video::empty();
    scaler.run(decoded, &mut rgba)
        .map_err(|e| DecodeError::Other { path: path.to_path_buf(), msg: e.to_string() })?;

    let data = destripe(rgba.data(0), rgba.stride(0), out_w as usize * 4, out_h as usize);
    eprintln!("[media] first frame {out_w}x{out_h} ← {}", path.display());
    PreviewImage::from_rgba(out_w, out_h, data)
        .ok_or_else(|| DecodeError::NoFrame { path: path.to_path_buf() })
}

/// Copy only the visible bytes of each row, dropping stride padding.
pub fn destripe(raw: &[u8], stride: usize, row_bytes: usize, rows: usize) -> Vec<u8> {
    (0..rows)
        .flat_map(|row| {
            let start = row * stride;
            &raw[start..start + row_bytes]
        })
        .copied()
        .collect()
}

/// Fit `w × h` inside `MAX_PREVIEW_EDGE`, keeping aspect and even dimensions.
pub fn preview_size(w: u32, h: u32) -> (u32, u32) {
    if w == 0 || h == 0 {
        return (0, 0);
    }
    let edge = w.max(h);
    if edge <= MAX_PREVIEW_EDGE {
        return (w, h);
    }
    let scale = MAX_PREVIEW_EDGE as f64 / edge as f64;
    let sw = ((w as f64 * scale) as u32).max(2) & !1;
    let sh = ((h as f64 * scale) as u32).max(2) & !1;
    (sw, sh)
}
