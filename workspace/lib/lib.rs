//! Shared output helpers for the workspace binaries.

use std::{ fs::{ self, File }, path::Path };
use anyhow::Context;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use num_complex::Complex;
use wavefield::{ field::{ self, Observable }, real::Real };

#[doc(hidden)]
pub use anyhow;

/// Create `path`'s parent directory if needed and open an `.npz` archive
/// there for writing.
pub fn open_npz<P>(path: P) -> anyhow::Result<NpzWriter<File>>
where P: AsRef<Path>
{
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("couldn't create {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("couldn't create {}", path.display()))?;
    Ok(NpzWriter::new(file))
}

/// Write every [`Observable`] channel of a complex field to `npz`, one array
/// per channel keyed by [`Observable::name`].
pub fn add_channels<S, D, F>(
    npz: &mut NpzWriter<File>,
    q: &nd::ArrayBase<S, D>,
) -> anyhow::Result<()>
where
    S: nd::Data<Elem = Complex<F>>,
    D: nd::Dimension,
    F: Real + ndarray_npy::WritableElement,
{
    for obs in Observable::ALL.into_iter() {
        npz.add_array(obs.name(), &field::project(q, obs))
            .with_context(|| format!("couldn't write array {:?}", obs.name()))?;
    }
    Ok(())
}

/// Write a set of named real arrays, and optionally the channels of one
/// complex field, to an `.npz` archive, creating directories as needed.
///
/// ```ignore
/// write_npz!(
///     outdir.join("out.npz"),
///     arrays: { "x" => &x, "t" => &t },
///     field: &q,
/// )?;
/// ```
#[macro_export]
macro_rules! write_npz {
    (
        $path:expr,
        arrays: { $( $name:expr => $arr:expr ),* $(,)? }
        $(, field: $q:expr )? $(,)?
    ) => {{
        let path = $path;
        $crate::open_npz(&path)
            .and_then(|mut npz| {
                $(
                    npz.add_array($name, $arr)
                        .map_err(|err| {
                            $crate::anyhow::anyhow!("couldn't write array {:?}: {}", $name, err)
                        })?;
                )*
                $( $crate::add_channels(&mut npz, $q)?; )?
                npz.finish()
                    .map_err(|err| {
                        $crate::anyhow::anyhow!(
                            "couldn't finish {}: {}",
                            ::std::path::Path::new(&path).display(),
                            err,
                        )
                    })?;
                Ok(())
            })
    }};
}
