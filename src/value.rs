//! Ergonomic, path based access into an eagerly parsed YAML
//! document.
//!
//! [`Yaml::load`] drives a [`Read`] source to completion,
//! storing the resulting nodes into memory. The resulting
//! [`Yaml`] (and the [`YamlNode`]s reached by navigating it)
//! can then be queried with [`scalar`](Yaml::scalar) /
//! [`node`](Yaml::node) and their `get_` / `try_`
//! counterparts, passing in a path built from string keys
//! and integer indexes.
//!
//! ```no_run
//! use yscan::{reader::from_utf8, value::Yaml};
//!
//! let src = from_utf8("name: YAML Ain't Markup Language");
//! let doc = Yaml::load(&src)?;
//!
//! assert_eq!(&*doc.scalar("name"), "YAML Ain't Markup Language");
//! # Ok::<(), yscan::Error>(())
//! ```

use std::fmt;

use crate::{
    error::{internal::ErrorCode, Result},
    node::{self, Document, View},
    reader::Read,
};

/// An eagerly parsed, in memory YAML document.
///
/// Constructed via [`Yaml::load`].
pub struct Yaml<'de>
{
    doc: Document<'de>,
}

impl<'de> Yaml<'de>
{
    /// Eagerly parse .src into an in memory document.
    ///
    /// Only the first document found in .src is retained;
    /// use [`crate::event`] directly to work with streams
    /// containing more than one document.
    pub fn load<R>(src: &'de R) -> Result<Self>
    where
        R: Read,
    {
        let doc = node::parse(src)?;

        Ok(Self { doc })
    }

    /// Fetch a scalar datum from the given .path
    ///
    /// Returns an empty scalar (`len==0`) if .path does not
    /// resolve to a scalar node.
    pub fn scalar<P>(&self, path: P) -> Scalar<'_>
    where
        P: AsPath,
    {
        self.get_scalar(path).unwrap_or_default()
    }

    /// Fetch a scalar datum from the given .path
    ///
    /// Returns `None` if .path does not resolve to a scalar
    /// node.
    pub fn get_scalar<P>(&self, path: P) -> Option<Scalar<'_>>
    where
        P: AsPath,
    {
        let segments = path.segments();
        let view = resolve(self.doc.root()?, &segments)?;

        view.as_scalar().map(Scalar::new)
    }

    /// Fetch a scalar datum from the given .path
    ///
    /// ## Errors
    ///
    /// Returns an error if .path does not resolve to a
    /// scalar node.
    pub fn try_scalar<P>(&self, path: P) -> Result<Scalar<'_>>
    where
        P: AsPath,
    {
        self.get_scalar(path).ok_or_else(missing_node)
    }

    /// Create a new [`YamlNode`] view using the node at
    /// .path as its root.
    ///
    /// The returned view is empty if .path does not resolve
    /// to anything in the document.
    pub fn node<P>(&self, path: P) -> YamlNode<'_, 'de>
    where
        P: AsPath,
    {
        self.get_node(path).unwrap_or_default()
    }

    /// Create a new [`YamlNode`] view using the node at
    /// .path as its root.
    ///
    /// Returns `None` if .path does not resolve to anything
    /// in the document.
    pub fn get_node<P>(&self, path: P) -> Option<YamlNode<'_, 'de>>
    where
        P: AsPath,
    {
        let segments = path.segments();
        let view = resolve(self.doc.root()?, &segments)?;

        Some(YamlNode { view: Some(view) })
    }

    /// Create a new [`YamlNode`] view using the node at
    /// .path as its root.
    ///
    /// ## Errors
    ///
    /// Returns an error if .path does not resolve to
    /// anything in the document.
    pub fn try_node<P>(&self, path: P) -> Result<YamlNode<'_, 'de>>
    where
        P: AsPath,
    {
        self.get_node(path).ok_or_else(missing_node)
    }
}

/// A node reached by navigating a [`Yaml`] document via
/// [`Yaml::node`] (or one of its `get_` / `try_`
/// counterparts).
///
/// A [`YamlNode`] may be empty, in which case every lookup
/// performed through it also resolves to nothing -- mirroring
/// the forgiving, "missing means empty" style of navigation
/// YAML documents are typically read with.
#[derive(Clone, Copy)]
pub struct YamlNode<'a, 'de>
{
    view: Option<View<'a, 'de>>,
}

impl<'a, 'de> YamlNode<'a, 'de>
{
    /// Fetch a scalar datum from the given .path, relative
    /// to this node.
    pub fn scalar<P>(&self, path: P) -> Scalar<'a>
    where
        P: AsPath,
    {
        self.get_scalar(path).unwrap_or_default()
    }

    /// Fetch a scalar datum from the given .path, relative
    /// to this node.
    pub fn get_scalar<P>(&self, path: P) -> Option<Scalar<'a>>
    where
        P: AsPath,
    {
        let segments = path.segments();
        let view = resolve(self.view?, &segments)?;

        view.as_scalar().map(Scalar::new)
    }

    /// Fetch a scalar datum from the given .path, relative
    /// to this node.
    ///
    /// ## Errors
    ///
    /// Returns an error if .path does not resolve to a
    /// scalar node.
    pub fn try_scalar<P>(&self, path: P) -> Result<Scalar<'a>>
    where
        P: AsPath,
    {
        self.get_scalar(path).ok_or_else(missing_node)
    }

    /// Create a new [`YamlNode`] using the node at .path
    /// (relative to this node) as its root.
    pub fn node<P>(&self, path: P) -> YamlNode<'a, 'de>
    where
        P: AsPath,
    {
        self.get_node(path).unwrap_or_default()
    }

    /// Create a new [`YamlNode`] using the node at .path
    /// (relative to this node) as its root.
    pub fn get_node<P>(&self, path: P) -> Option<YamlNode<'a, 'de>>
    where
        P: AsPath,
    {
        let segments = path.segments();
        let view = resolve(self.view?, &segments)?;

        Some(Self { view: Some(view) })
    }

    /// Create a new [`YamlNode`] using the node at .path
    /// (relative to this node) as its root.
    ///
    /// ## Errors
    ///
    /// Returns an error if .path does not resolve to
    /// anything relative to this node.
    pub fn try_node<P>(&self, path: P) -> Result<YamlNode<'a, 'de>>
    where
        P: AsPath,
    {
        self.get_node(path).ok_or_else(missing_node)
    }

    /// True if the path used to reach this node did not
    /// resolve to anything in the document.
    pub fn is_empty(&self) -> bool
    {
        self.view.is_none()
    }
}

impl Default for YamlNode<'_, '_>
{
    fn default() -> Self
    {
        Self { view: None }
    }
}

fn resolve<'g, 'de>(root: View<'g, 'de>, path: &[PathSegment<'_>]) -> Option<View<'g, 'de>>
{
    let mut current = root;

    for segment in path
    {
        current = match *segment
        {
            PathSegment::Key(key) => current.get_key(key)?,
            PathSegment::Index(index) => current.get_index(index)?,
        };
    }

    Some(current)
}

fn missing_node() -> crate::Error
{
    crate::error::internal::mkError!(ErrorCode::MissingNode, KIND)
}

/// A borrowed scalar datum fetched from a [`Yaml`] document.
///
/// Derefs to `&str`; an empty [`Scalar`] (`len() == 0`) is
/// returned by the non-`try_`/`get_` accessors when a path
/// does not resolve to a scalar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar<'a>
{
    s: &'a str,
}

impl<'a> Scalar<'a>
{
    fn new(slice: &'a crate::token::Slice<'_>) -> Self
    {
        Self { s: &**slice }
    }
}

impl Default for Scalar<'_>
{
    fn default() -> Self
    {
        Self { s: "" }
    }
}

impl std::ops::Deref for Scalar<'_>
{
    type Target = str;

    fn deref(&self) -> &Self::Target
    {
        self.s
    }
}

impl fmt::Display for Scalar<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(self.s, f)
    }
}

impl PartialEq<str> for Scalar<'_>
{
    fn eq(&self, other: &str) -> bool
    {
        self.s == other
    }
}

impl PartialEq<&str> for Scalar<'_>
{
    fn eq(&self, other: &&str) -> bool
    {
        self.s == *other
    }
}

/// A single step taken while navigating a [`Yaml`] document:
/// either a mapping key, or a sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a>
{
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for PathSegment<'a>
{
    fn from(key: &'a str) -> Self
    {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment<'_>
{
    fn from(index: usize) -> Self
    {
        Self::Index(index)
    }
}

/// A path into a [`Yaml`] document.
///
/// Implemented for `&str` and `usize` directly, as single
/// segment paths, and for slices / arrays of [`PathSegment`]
/// for navigating through nested mappings and sequences, e.g
/// `["name", PathSegment::Index(5), "name"]`.
pub trait AsPath
{
    #[doc(hidden)]
    fn segments(&self) -> Vec<PathSegment<'_>>;
}

impl AsPath for str
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        vec![PathSegment::Key(self)]
    }
}

impl AsPath for usize
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        vec![PathSegment::Index(*self)]
    }
}

impl AsPath for PathSegment<'_>
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        vec![*self]
    }
}

impl AsPath for [PathSegment<'_>]
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        self.to_vec()
    }
}

impl<const N: usize> AsPath for [PathSegment<'_>; N]
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        self.to_vec()
    }
}

impl<P> AsPath for &P
where
    P: AsPath + ?Sized,
{
    fn segments(&self) -> Vec<PathSegment<'_>>
    {
        (**self).segments()
    }
}
