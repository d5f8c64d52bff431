//! Map viewport state, render payloads and the selection reducer.
//!
//! The rendering surface (page, widgets, map library) lives outside this
//! crate and talks to it through [`controller::MapRequest`] and
//! [`controller::MapResponse`]. Everything here is a pure function of its
//! inputs: the controller owns only the immutable dataset, and the per-session
//! selection and viewport are passed in on every call.
//!
//! - `view_state`: the camera. It survives re-filtering and is only changed
//!   by viewport events or an explicit reset.
//! - `render`: turns a filtered subset and a viewport into map points, the
//!   fixed condition color table and presentation constants.
//! - `controller`: `(selection, prior viewport) -> payload` and the match count.

pub mod controller;
pub mod render;
pub mod view_state;
