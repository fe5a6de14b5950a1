use crate::coords::SurfaceSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let srgb = formats.iter().copied().find(|f| f.is_srgb());
        if srgb.is_some() {
            return srgb;
        }
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    preferred: &[wgpu::CompositeAlphaMode],
) -> wgpu::CompositeAlphaMode {
    preferred
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Updates the stored size and reconfigures the surface.
///
/// wgpu rejects 0x0 configurations; in that case only the stored size changes
/// and configuration is deferred to the next non-empty resize.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut SurfaceSize,
    new_size: SurfaceSize,
) {
    *size = new_size;
    if new_size.is_empty() {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: SurfaceSize,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if !size.is_empty() {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Format};

    #[test]
    fn srgb_format_preferred_when_available() {
        let formats = [Format::Bgra8Unorm, Format::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Format::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(Format::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(
            choose_surface_format(&[Format::Rgba16Float], true),
            Some(Format::Rgba16Float)
        );
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn premultiplied_alpha_wins_when_supported() {
        let preferred = [Alpha::PreMultiplied, Alpha::PostMultiplied];
        assert_eq!(
            choose_alpha_mode(&[Alpha::Opaque, Alpha::PreMultiplied], &preferred),
            Alpha::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&[Alpha::Opaque, Alpha::PostMultiplied], &preferred),
            Alpha::PostMultiplied
        );
    }

    #[test]
    fn opaque_only_surface_falls_back() {
        let preferred = [Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&[Alpha::Opaque], &preferred), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], &preferred), Alpha::Auto);
    }
}
