/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Lazily populated, arena backed tree of YAML nodes, built
//! by driving an [`Events`](crate::event::Events) stream
//! through a [`Visitor`](visitor::Visitor).
//!
//! This module is an internal implementation detail of the
//! crate; the stable surface built on top of it is
//! [`crate::value::Yaml`]. It corresponds to the `Node` /
//! `Document` / `Stream` triad, generalized to be driven by
//! the higher level event stream rather than scanning
//! tokens directly.

pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod nodes;
mod visitor;

use crate::{
    node::{
        error::NodeResult as Result,
        graph::Graph,
        nodes::{Node, NodeIndex},
        visitor::{graph_visitor::GraphVisitor, stream_consumer::StreamConsumer},
    },
    reader::Read,
};

/// Slice type used for all borrowed string content stored
/// in the node arena.
pub(in crate::node) type Slice<'a> = crate::token::Slice<'a>;

/// Eagerly parse .src, storing every node produced into an
/// in memory [`Graph`] and returning a handle to it.
///
/// Only the first document in the stream is addressable
/// through the returned [`Document`]'s `root()`; subsequent
/// documents (if any) are still parsed and stored in the
/// arena, but are unreachable from it. Streams containing
/// more than one document should instead be consumed through
/// [`crate::event`].
pub(crate) fn parse<'de, R>(src: &'de R) -> Result<Document<'de>>
where
    R: Read,
{
    let graph = StreamConsumer::from_src(src, GraphVisitor).parse()?;

    Ok(Document { graph })
}

/// An eagerly parsed YAML document, backed by an arena of
/// [`Node`]s.
pub(crate) struct Document<'de>
{
    graph: Graph<'de>,
}

impl<'de> Document<'de>
{
    /// A [`View`] of this document's root node, or None if
    /// the stream contained no documents at all.
    pub(crate) fn root(&self) -> Option<View<'_, 'de>>
    {
        self.graph.head().map(|id| View::new(&self.graph, id))
    }
}

/// A read only handle to a single node inside a
/// [`Document`]'s arena, with the path based lookup helpers
/// [`crate::value::Yaml`] is built from.
#[derive(Clone, Copy)]
pub(crate) struct View<'g, 'de>
{
    graph: &'g Graph<'de>,
    id:    NodeIndex,
}

impl<'g, 'de> View<'g, 'de>
{
    fn new(graph: &'g Graph<'de>, id: NodeIndex) -> Self
    {
        Self { graph, id }
    }

    /// Follow this node's alias chain (if any), returning a
    /// [`View`] of the first non alias node found.
    ///
    /// Aliases may only reference anchors already seen
    /// earlier in the same document, so this is guaranteed
    /// to terminate.
    pub(crate) fn resolve(self) -> Self
    {
        let mut current = self;

        loop
        {
            match &current.graph.nodes()[current.id]
            {
                Node::Alias(alias) => current = View::new(current.graph, alias.points_to()),
                _ => return current,
            }
        }
    }

    /// This node's scalar content, following aliases, if it
    /// is (or resolves to) a scalar node.
    pub(crate) fn as_scalar(self) -> Option<&'g Slice<'de>>
    {
        let this = self.resolve();

        match &this.graph.nodes()[this.id]
        {
            Node::Leaf(scalar) => Some(scalar.value()),
            _ => None,
        }
    }

    /// Look up a mapping entry by its scalar key name,
    /// following aliases on both this node and candidate
    /// keys.
    ///
    /// Returns None if this node is not (or does not
    /// resolve to) a mapping, no matching key is found, or
    /// the matching key has no associated value.
    pub(crate) fn get_key(self, key: &str) -> Option<View<'g, 'de>>
    {
        let this = self.resolve();

        let map = match &this.graph.nodes()[this.id]
        {
            Node::Map(map) => map,
            _ => return None,
        };

        for (&k_id, v_id) in map.children()
        {
            let k_view = View::new(this.graph, k_id).resolve();

            let is_match = matches!(
                &k_view.graph.nodes()[k_view.id],
                Node::Leaf(scalar) if &**scalar.value() == key
            );

            if is_match
            {
                return (*v_id).map(|id| View::new(this.graph, id));
            }
        }

        None
    }

    /// Look up a sequence entry by index, following aliases.
    ///
    /// Returns None if this node is not (or does not
    /// resolve to) a sequence, or .index is out of bounds.
    pub(crate) fn get_index(self, index: usize) -> Option<View<'g, 'de>>
    {
        let this = self.resolve();

        match &this.graph.nodes()[this.id]
        {
            Node::List(seq) => seq
                .children()
                .get(index)
                .map(|&id| View::new(this.graph, id)),
            _ => None,
        }
    }
}
