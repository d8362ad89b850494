//! Internal Path Representation.
//!
//! Every file in a compendium is addressed by an [`IPR`]: a path relative to
//! whatever root the files were listed from (or will be written to). IPRs are
//! plain strings under the hood, but they're always kept in canonical form, so
//! equality is meaningful and cheap.
//!
//! ```
//! use ipr::IPR;
//!
//! let p = IPR::from("/blog//posts/./hello.md");
//! assert_eq!(p, "blog/posts/hello.md");
//! assert_eq!(p.directory(), "blog/posts");
//! assert_eq!(p.base_name(), "hello");
//! assert_eq!(p.extension(), "md");
//! assert_eq!(p.with_extension("html"), "blog/posts/hello.html");
//! ```

use lazy_regex::regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Internal Path Representation.
///
/// They obey the following rules:
///
///  * Valid UTF-8
///  * Are path-separated with /
///  * Do not begin or end with /
///  * Do not contain . or .. segments
///  * Do not contain multiple / characters right next to each other
///
/// We can infallibly convert to these constraints as long as the input is
/// already UTF-8. Non-unicode file names on disk are not representable, and
/// listing a directory that contains one fails rather than guessing.
///
/// The last segment is the file name. It splits into a base name and an
/// extension on its final `.`, except when that dot is the very first
/// character: `.hidden` is all base name, `archive.tar.gz` is `archive.tar`
/// plus `gz`.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IPR(String);

impl AsRef<str> for IPR {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IPR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> PartialEq<T> for IPR
where
    T: ToIPR,
{
    fn eq(&self, other: &T) -> bool {
        self.eq(&other.to_ipr())
    }
}

pub trait ToIPR: AsRef<str> {
    fn to_ipr(&self) -> IPR {
        let converted = IPR::canonize(self.as_ref());
        IPR(converted.to_string())
    }
}

impl ToIPR for &str {}
impl ToIPR for &&str {}
impl ToIPR for String {}
impl ToIPR for &String {}

impl From<&str> for IPR {
    fn from(other: &str) -> IPR {
        other.to_ipr()
    }
}
impl From<&&str> for IPR {
    fn from(other: &&str) -> IPR {
        other.to_ipr()
    }
}
impl From<String> for IPR {
    fn from(other: String) -> IPR {
        other.to_ipr()
    }
}
impl From<&String> for IPR {
    fn from(other: &String) -> IPR {
        other.to_ipr()
    }
}
impl From<&IPR> for IPR {
    fn from(other: &IPR) -> IPR {
        other.clone()
    }
}
impl From<IPR> for String {
    fn from(other: IPR) -> String {
        other.0
    }
}

impl IPR {
    /// The empty path, which refers to the root itself.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a path out of individual segments.
    ///
    /// Segments may themselves contain slashes; the result is canonized.
    pub fn from_segments<S>(segments: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect::<Vec<String>>()
            .join("/");
        joined.into()
    }

    /// Build a path from a directory, a base name and an extension.
    ///
    /// An empty extension leaves off the dot entirely.
    pub fn from_parts(directory: &IPR, base_name: &str, extension: &str) -> Self {
        let file_name = if extension.is_empty() {
            base_name.to_owned()
        } else {
            format!("{}.{}", base_name, extension)
        };
        directory.join(file_name)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Everything but the last segment.
    pub fn directory(&self) -> IPR {
        match self.0.rsplit_once('/') {
            Some((dir, _)) => IPR(dir.to_owned()),
            None => IPR::empty(),
        }
    }

    /// How many directories deep the file sits.
    pub fn depth(&self) -> usize {
        self.directory().segments().count()
    }

    /// The path one level up, or `None` for the empty path.
    pub fn parent(&self) -> Option<IPR> {
        match self.is_empty() {
            true => None,
            false => Some(self.directory()),
        }
    }

    /// The last segment, including any extension.
    pub fn file_name(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, file)) => file,
            None => &self.0,
        }
    }

    pub fn base_name(&self) -> &str {
        split_file_name(self.file_name()).0
    }

    pub fn extension(&self) -> &str {
        split_file_name(self.file_name()).1
    }

    /// Move the file into a different directory, keeping its name.
    pub fn with_directory(&self, directory: impl Into<IPR>) -> IPR {
        directory.into().join(self.file_name())
    }

    pub fn with_base_name(&self, base_name: &str) -> IPR {
        IPR::from_parts(&self.directory(), base_name, self.extension())
    }

    pub fn with_extension(&self, extension: &str) -> IPR {
        IPR::from_parts(&self.directory(), self.base_name(), extension)
    }

    /// Append a relative path onto this one.
    ///
    /// ```
    /// use ipr::IPR;
    /// assert_eq!(IPR::from("a/b").join("c/d.txt"), "a/b/c/d.txt");
    /// assert_eq!(IPR::empty().join("c"), "c");
    /// ```
    pub fn join(&self, rel: impl Into<IPR>) -> IPR {
        let rel = rel.into();
        match (self.is_empty(), rel.is_empty()) {
            (true, _) => rel,
            (false, true) => self.clone(),
            (false, false) => IPR(format!("{}/{}", self.0, rel.0)),
        }
    }

    /// Put `base` in front of this path.
    pub fn prepend(&self, base: impl Into<IPR>) -> IPR {
        base.into().join(self)
    }

    /// Resolve against a real directory on disk.
    ///
    /// ```
    /// use ipr::IPR;
    /// use std::path::Path;
    ///
    /// let real = IPR::from("b/example.html").under("/srv/site");
    /// assert_eq!(real, Path::new("/srv/site/b/example.html"));
    /// ```
    pub fn under(&self, root: impl AsRef<Path>) -> PathBuf {
        let mut pb = root.as_ref().to_path_buf();
        for segment in self.segments() {
            pb.push(segment);
        }
        pb
    }

    pub fn is_well_formed(src: &str) -> bool {
        // Cheaper than running the regex on every conversion.
        enum SM {
            Strt,
            Slsh,
            Dot1,
            Dot2,
            Char,
        }

        let mut sm = SM::Strt;
        for c in src.chars() {
            sm = match (sm, c) {
                (SM::Strt, '/') => return false, // No leading slashes
                (SM::Strt, '.') => SM::Dot1,
                (SM::Strt, ___) => SM::Char,
                (SM::Slsh, '/') => return false, // Invalid: "//"
                (SM::Slsh, '.') => SM::Dot1,
                (SM::Slsh, ___) => SM::Char,
                (SM::Dot1, '/') => return false, // Invalid: "./"
                (SM::Dot1, '.') => SM::Dot2,
                (SM::Dot1, ___) => SM::Char,
                (SM::Dot2, '/') => return false, // Invalid: "../"
                (SM::Dot2, '.') => SM::Char,     // "..." is actually okay
                (SM::Dot2, ___) => SM::Char,
                (SM::Char, '/') => SM::Slsh,
                (SM::Char, '.') => SM::Char,
                (SM::Char, ___) => SM::Char,
            }
        }
        match sm {
            SM::Strt => true,
            SM::Slsh => false,
            SM::Dot1 => false,
            SM::Dot2 => false,
            SM::Char => true,
        }
    }

    pub fn canonize(src: &str) -> Cow<'_, str> {
        if IPR::is_well_formed(src) {
            Cow::Borrowed(src)
        } else {
            Cow::Owned(Self::force_canonize(src))
        }
    }

    pub fn force_canonize(src: &str) -> String {
        let r = regex!("/");
        r.split(src)
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect::<Vec<&str>>()
            .join("/")
    }
}

fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        None | Some(0) => (name, ""),
        Some(n) => (&name[..n], &name[n + 1..]),
    }
}
