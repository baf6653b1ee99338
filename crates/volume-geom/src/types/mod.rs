// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value types shared by the probe and the volume transform.
//!
//! All of them are `Copy` and constructed per call. Volumes are never edited
//! in place: transforms compute fresh bounds and build a new value once.

#[doc = "Logical directions, yaw rotation, absolute axes and axis planes."]
pub mod direction;
#[doc = "Planar points and unsorted rectangular regions on the XZ plane."]
pub mod planar;
#[doc = "Axis-aligned volumes and the host volume seam."]
pub mod volume;
