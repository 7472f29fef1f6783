/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the errors that may surface while
//! parsing a YAML event stream into memory.

use crate::{error::Error, event::error::ParseError, scanner::error::ScanError};

/// Result type returned by [`yscan::node`](super)
pub(crate) type NodeResult<T> = std::result::Result<T, NodeError>;

/// Possible errors that can be encountered while parsing
/// YAML graph structures.
#[derive(Debug)]
pub(crate) enum NodeError
{
    /// An alias referenced an anchor that has not been
    /// defined anywhere earlier in the document.
    UndefinedAlias,

    Parser(ParseError),
    Scanner(ScanError),
    Event(Error),
}

impl From<ParseError> for NodeError
{
    fn from(err: ParseError) -> Self
    {
        Self::Parser(err)
    }
}

impl From<ScanError> for NodeError
{
    fn from(err: ScanError) -> Self
    {
        Self::Scanner(err)
    }
}

impl From<Error> for NodeError
{
    fn from(err: Error) -> Self
    {
        Self::Event(err)
    }
}

impl From<NodeError> for Error
{
    fn from(err: NodeError) -> Self
    {
        match err
        {
            NodeError::Event(err) => err,
            NodeError::Parser(err) => err.into(),
            NodeError::Scanner(err) => err.into(),
            NodeError::UndefinedAlias => crate::error::internal::mkError!(
                crate::error::internal::ErrorCode::UndefinedTag,
                KIND
            ),
        }
    }
}
