//! Field decoders for the legacy (V1) Yjs update format.
//!
//! An update is a run of struct records followed by a delete set. The code
//! that applies updates knows the record layout and calls one typed
//! `read_*` method per field; the decoders in this crate map each field to
//! a single lib0 primitive read and nothing more.
//!
//! - [`DsDecoder`] / [`UpdateDecoder`]: the contract shared with the
//!   delta-encoded V2 format.
//! - [`DsDecoderV1`] / [`UpdateDecoderV1`]: the V1 implementations.
//! - [`DsEncoderV1`] / [`UpdateEncoderV1`]: the matching writers.
//!
//! ```
//! use ycs_update::{id, update_decoder, UpdateDecoder, UpdateEncoder, UpdateEncoderV1};
//! use ycs_update::DsEncoder;
//!
//! let mut enc = UpdateEncoderV1::new();
//! enc.write_left_id(id(1, 2));
//! enc.write_parent_info(true);
//! let bytes = enc.to_vec();
//!
//! let mut dec = update_decoder(&bytes);
//! assert_eq!(dec.read_left_id(), Ok(id(1, 2)));
//! assert_eq!(dec.read_parent_info(), Ok(true));
//! ```
//!
//! Decoders hold their stream either owned ([`UpdateDecoderV1::new`]) or
//! borrowed ([`UpdateDecoderV1::leave_open`]); see [`Input`].

pub mod codec;
mod error;
mod id;
mod input;

pub use codec::v1::{ds_decoder, update_decoder, DsDecoderV1, DsEncoderV1, UpdateDecoderV1, UpdateEncoderV1};
pub use codec::{DsDecoder, DsEncoder, UpdateDecoder, UpdateEncoder};
pub use error::DecodeError;
pub use id::{id, Id};
pub use input::Input;
pub use ycs_lib0::Any;
