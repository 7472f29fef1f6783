/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exposes methods for directly interacting
//! with YAML event streams.
//!
//! ## Understanding Events
//!
//! Each event produced represents an important semantic
//! change in the underlying YAML byte stream. Broadly,
//! these can be categorized into three spaces:
//!
//! 1. Virtual / Marker
//!     - [`StreamStart`]
//!     - [`StreamEnd`]
//!     - [`DocumentStart`]
//!     - [`DocumentEnd`]
//!
//! 2. Nesting change (+-)
//!     - [`MappingStart`]
//!     - [`MappingEnd`]
//!     - [`SequenceStart`]
//!     - [`SequenceEnd`]
//!
//! 3. Data / Alias
//!     - [`Scalar`]
//!     - [`Alias`]
//!
//! Together, these are used to produce the following
//! productions:
//!
//! ```text
//! stream          := StreamStart document+ StreamEnd
//! document        := DocumentStart content? DocumentEnd
//! content         := Scalar | collection
//! collection      := sequence | mapping
//! sequence        := SequenceStart node* SequenceEnd
//! mapping         := MappingStart (node node)* MappingEnd
//! node            := Alias | content
//!
//! ?               => 0 or 1 of prefix
//! *               => 0 or more of prefix
//! +               => 1 or more of prefix
//! ()              => production grouping
//! |               => production logical OR
//! ```
//!
//! In addition to the various [`Event`] types, every
//! [`Node`] also provides a hint as to its placement in the
//! stream via its [`NodeKind`]. Together, these should
//! allow users to maintain relatively little external state
//! regarding the [`Event`] stream, beyond anything they
//! wish to collect from the stream.
//!
//! [`StreamStart`]:    enum@types::EventData::StreamStart
//! [`StreamEnd`]:      enum@types::EventData::StreamEnd
//! [`DocumentStart`]:  enum@types::EventData::DocumentStart
//! [`DocumentEnd`]:    enum@types::EventData::DocumentEnd
//! [`MappingStart`]:   enum@types::EventData::MappingStart
//! [`MappingEnd`]:     enum@types::EventData::MappingEnd
//! [`SequenceStart`]:  enum@types::EventData::SequenceStart
//! [`SequenceEnd`]:    enum@types::EventData::SequenceEnd
//! [`Scalar`]:         enum@types::EventData::Scalar
//! [`Alias`]:          enum@types::EventData::Alias
//! [`Node`]:           struct@types::Node
//! [`NodeKind`]:       enum@types::NodeKind
//! [`Token`]:          enum@crate::token::Token
//! [`Read`]:           trait@crate::reader::Read

mod parser;
mod state;

pub mod error;
pub mod types;

use crate::{
    error::Result,
    event::{parser::Parser, types::Event},
    reader::{PeekReader, Read, Reader},
    scanner::flag::{Flags, O_ZEROED},
};

/// Instantiate a new [`Events`] stream from the given .src,
/// using the default set of [`Flags`].
///
/// This is the most convenient way to go from a [`Read`]
/// source straight to an [`Event`] stream.
///
/// ## Examples
///
/// ```rust
/// use yscan::{event, reader};
///
/// let src = reader::from_utf8("a: b");
/// let mut events = event::from_reader(&src);
///
/// while let Some(event) = events.iter().next_event()? {
///     // ...
/// #   let _ = event;
/// }
/// # Ok::<(), yscan::error::Error>(())
/// ```
pub fn from_reader<'de, T>(src: &'de T) -> Events<'de, T>
where
    T: Read,
{
    Events::new(src, O_ZEROED)
}

/// A stream of [`Event`]s produced by driving a [`Parser`]
/// over a [`Read`] source.
///
/// This is the primary, high level interface for consuming
/// YAML as a sequence of events, equivalent in spirit to a
/// `Stream::documents()` iterator.
#[derive(Debug)]
pub struct Events<'de, T: 'de>
{
    tokens: PeekReader<'de, T>,
    parser: Parser,
}

impl<'de, T> Events<'de, T>
where
    T: Read,
{
    /// Instantiate a new [`Events`] stream, reading tokens
    /// from .src, using the provided .opts to configure the
    /// underlying [`Scanner`](crate::scanner::Scanner).
    pub fn new(src: &'de T, opts: Flags) -> Self
    {
        Self {
            tokens: PeekReader::new(Reader::new(src, opts)),
            parser: Parser::new(),
        }
    }

    /// Borrow this [`Events`] stream through an interface
    /// exposing [`next_event`](EventsIter::next_event), its
    /// sole method of interest.
    pub fn iter(&mut self) -> EventsIter<'_, 'de, T>
    {
        EventsIter(self)
    }
}

/// A borrow of an [`Events`] stream, providing the means to
/// retrieve the next [`Event`].
#[derive(Debug)]
pub struct EventsIter<'a, 'de, T: 'de>(&'a mut Events<'de, T>);

impl<'a, 'de, T> EventsIter<'a, 'de, T>
where
    T: Read,
{
    /// Retrieve the next [`Event`] from the stream, or None
    /// if the stream is finished.
    pub fn next_event(&mut self) -> Result<Option<Event<'de>>>
    {
        self.0
            .parser
            .next_event(&mut self.0.tokens)
            .transpose()
            .map_err(Into::into)
    }
}
