//! Logo cleanup and icon family generation
//!
//! Every entry point validates its inputs and renders all assets in memory
//! before touching the output tree. Assets are then written to sibling
//! temporary files and renamed into place together.

use crate::{BrandConfig, IconError, IconResult, IconSet, IconTarget, normalize_path};
use brandkit_core::{ImageFormat, Pix};
use brandkit_io::{read_image, write_image_mem};
use brandkit_region::fill_border_connected;
use brandkit_transform::scale_to_size;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// An encoded asset waiting to be written.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl RenderedIcon {
    /// Encode `pix` for `path`, choosing the format from the extension
    pub fn encode(pix: &Pix, path: PathBuf) -> IconResult<Self> {
        let format = IconTarget::new(path.clone(), pix.width(), pix.height()).format();
        Ok(Self {
            bytes: write_image_mem(pix, format)?,
            width: pix.width(),
            height: pix.height(),
            format,
            path,
        })
    }
}

/// Replace the border-connected near-white background with the brand color.
///
/// Returns a cleaned copy; `pix` itself is untouched.
pub fn clean_logo(pix: &Pix, config: &BrandConfig) -> IconResult<Pix> {
    config.validate()?;
    let mut pm = pix.to_mut();
    let filled = fill_border_connected(&mut pm, &config.predicate(), config.brand_color);
    debug!(
        "border fill recolored {} of {} pixels",
        filled,
        pix.width() as u64 * pix.height() as u64
    );
    Ok(pm.into())
}

/// Resize `master` to every target and encode the results in memory.
pub fn render_icon_set(master: &Pix, set: &IconSet) -> IconResult<Vec<RenderedIcon>> {
    set.iter()
        .map(|target| {
            if target.width == 0 || target.height == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "zero-sized target {}",
                    target.path.display()
                )));
            }
            let resized = scale_to_size(master, target.width, target.height)?;
            RenderedIcon::encode(&resized, target.path.clone())
        })
        .collect()
}

static SIBLING_SEQ: AtomicU64 = AtomicU64::new(0);

/// A hidden sibling of `path`, unique to this process and call.
fn sibling_path(path: &Path, ext: &str) -> IconResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        IconError::InvalidConfig(format!("output path has no file name: {}", path.display()))
    })?;
    Ok(path.with_file_name(format!(
        ".{}.{}-{}.{}",
        name.to_string_lossy(),
        std::process::id(),
        SIBLING_SEQ.fetch_add(1, Ordering::Relaxed),
        ext
    )))
}

/// One asset moving through stage, backup and commit.
struct Staged<'a> {
    icon: &'a RenderedIcon,
    tmp: PathBuf,
    backup: PathBuf,
    backed_up: bool,
    committed: bool,
}

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> IconError + use<> {
    let path = path.to_path_buf();
    move |source| IconError::Write { path, source }
}

/// Write rendered assets, all or nothing.
///
/// Parent directories are created as needed. Each asset goes to a sibling
/// temporary file first. Destinations are then checked, existing files are
/// moved to backups, and the temporaries are renamed into place. If any
/// step fails, committed files are removed and backups restored, so the
/// output tree is left as it was.
pub fn write_rendered(rendered: &[RenderedIcon]) -> IconResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    for icon in rendered {
        if !seen.insert(normalize_path(&icon.path)) {
            return Err(IconError::InvalidConfig(format!(
                "duplicate output path {}",
                icon.path.display()
            )));
        }
    }

    let mut staged = rendered
        .iter()
        .map(|icon| {
            Ok(Staged {
                tmp: sibling_path(&icon.path, "tmp")?,
                backup: sibling_path(&icon.path, "bak")?,
                icon,
                backed_up: false,
                committed: false,
            })
        })
        .collect::<IconResult<Vec<_>>>()?;

    match stage(&staged).and_then(|()| commit(&mut staged)) {
        Ok(written) => {
            for s in staged.iter().filter(|s| s.backed_up) {
                let _ = fs::remove_file(&s.backup);
            }
            for s in &staged {
                info!(
                    "generated {} ({}x{})",
                    s.icon.path.display(),
                    s.icon.width,
                    s.icon.height
                );
            }
            Ok(written)
        }
        Err(e) => {
            warn!("rolling back icon write: {}", e);
            roll_back(&staged);
            Err(e)
        }
    }
}

fn stage(staged: &[Staged<'_>]) -> IconResult<()> {
    for s in staged {
        if let Some(parent) = s.icon.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err(parent))?;
        }
        fs::write(&s.tmp, &s.icon.bytes).map_err(write_err(&s.tmp))?;
    }
    Ok(())
}

fn commit(staged: &mut [Staged<'_>]) -> IconResult<Vec<PathBuf>> {
    for s in staged.iter() {
        if s.icon.path.is_dir() {
            return Err(IconError::Write {
                path: s.icon.path.clone(),
                source: std::io::Error::new(ErrorKind::IsADirectory, "destination is a directory"),
            });
        }
    }

    for s in staged.iter_mut() {
        if s.icon.path.exists() {
            fs::rename(&s.icon.path, &s.backup).map_err(write_err(&s.icon.path))?;
            s.backed_up = true;
        }
    }

    let mut written = Vec::with_capacity(staged.len());
    for s in staged.iter_mut() {
        fs::rename(&s.tmp, &s.icon.path).map_err(write_err(&s.icon.path))?;
        s.committed = true;
        written.push(s.icon.path.clone());
    }
    Ok(written)
}

/// Undo a partial write: drop committed files, restore backups and remove
/// temporaries.
fn roll_back(staged: &[Staged<'_>]) {
    for s in staged {
        if s.committed {
            let _ = fs::remove_file(&s.icon.path);
        }
        if s.backed_up {
            if let Err(e) = fs::rename(&s.backup, &s.icon.path) {
                warn!("could not restore {}: {}", s.icon.path.display(), e);
            }
        }
        let _ = fs::remove_file(&s.tmp);
    }
}

fn open_source(source: &Path) -> IconResult<Pix> {
    if !source.is_file() {
        return Err(IconError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    let pix = read_image(source)?;
    info!(
        "opened source {} ({}x{}, {:?})",
        source.display(),
        pix.width(),
        pix.height(),
        pix.informat()
    );
    Ok(pix)
}

/// Clean a logo's background and regenerate the icon family from it.
///
/// The cleaned image is written at its native size to `master_path`; any
/// target of `set` at that same path is superseded by it.
pub fn fix_icon<S, M>(
    source: S,
    master_path: M,
    set: &IconSet,
    config: &BrandConfig,
) -> IconResult<Vec<PathBuf>>
where
    S: AsRef<Path>,
    M: AsRef<Path>,
{
    let master_path = master_path.as_ref();
    let pix = open_source(source.as_ref())?;
    let cleaned = clean_logo(&pix, config)?;

    let set = set.clone().without(master_path);
    let mut rendered = vec![RenderedIcon::encode(&cleaned, master_path.to_path_buf())?];
    rendered.extend(render_icon_set(&cleaned, &set)?);
    write_rendered(&rendered)
}

/// Resize a finished design to every target without further processing.
pub fn resize_icons<S: AsRef<Path>>(source: S, set: &IconSet) -> IconResult<Vec<PathBuf>> {
    let pix = open_source(source.as_ref())?;
    let rendered = render_icon_set(&pix, set)?;
    write_rendered(&rendered)
}

/// Place `logo` on a brand-colored `width` x `height` canvas.
///
/// The logo is scaled to `logo_fraction` of the canvas width, keeping its
/// aspect ratio, then centered and shifted by the scaled `logo_offset`.
pub fn compose_icon(logo: &Pix, width: u32, height: u32, config: &BrandConfig) -> IconResult<Pix> {
    config.validate()?;
    let lw = ((width as f32 * config.logo_fraction) as u32).max(1);
    let lh = ((lw as f64 * logo.height() as f64 / logo.width() as f64) as u32).max(1);
    let resized = scale_to_size(logo, lw, lh)?;

    let (dx, dy) = config.scaled_offset(width);
    let x = (width as i64 - lw as i64).div_euclid(2) + dx as i64;
    let y = (height as i64 - lh as i64).div_euclid(2) + dy as i64;

    let mut canvas = Pix::new_filled(width, height, config.brand_color)?.into_mut();
    canvas.composite_over(&resized, x as i32, y as i32);
    Ok(canvas.into())
}

/// Compose the logo at `logo` onto a brand-colored canvas for every target.
pub fn compose_icons<S: AsRef<Path>>(
    logo: S,
    set: &IconSet,
    config: &BrandConfig,
) -> IconResult<Vec<PathBuf>> {
    config.validate()?;
    let logo = open_source(logo.as_ref())?;
    let rendered = set
        .iter()
        .map(|target| {
            let icon = compose_icon(&logo, target.width, target.height, config)?;
            RenderedIcon::encode(&icon, target.path.clone())
        })
        .collect::<IconResult<Vec<_>>>()?;
    write_rendered(&rendered)
}
