//! Numeric tag constants for the UAS Datalink Local Set,
//! for use in compile-time lookups and matching.

use klv_core::Tag;

/// Checksum
pub const CHECKSUM: Tag = Tag(1);
/// Precision Time Stamp
pub const PRECISION_TIME_STAMP: Tag = Tag(2);
/// Mission ID
pub const MISSION_ID: Tag = Tag(3);
/// Platform Tail Number
pub const PLATFORM_TAIL_NUMBER: Tag = Tag(4);
/// Platform Heading Angle
pub const PLATFORM_HEADING_ANGLE: Tag = Tag(5);
/// Platform Pitch Angle
pub const PLATFORM_PITCH_ANGLE: Tag = Tag(6);
/// Platform Roll Angle
pub const PLATFORM_ROLL_ANGLE: Tag = Tag(7);
/// Platform True Airspeed
pub const PLATFORM_TRUE_AIRSPEED: Tag = Tag(8);
/// Platform Indicated Airspeed
pub const PLATFORM_INDICATED_AIRSPEED: Tag = Tag(9);
/// Platform Designation
pub const PLATFORM_DESIGNATION: Tag = Tag(10);
/// Image Source Sensor
pub const IMAGE_SOURCE_SENSOR: Tag = Tag(11);
/// Image Coordinate System
pub const IMAGE_COORDINATE_SYSTEM: Tag = Tag(12);
/// Sensor Latitude
pub const SENSOR_LATITUDE: Tag = Tag(13);
/// Sensor Longitude
pub const SENSOR_LONGITUDE: Tag = Tag(14);
/// Sensor True Altitude
pub const SENSOR_TRUE_ALTITUDE: Tag = Tag(15);
/// Sensor Horizontal Field of View
pub const SENSOR_HORIZONTAL_FIELD_OF_VIEW: Tag = Tag(16);
/// Sensor Vertical Field of View
pub const SENSOR_VERTICAL_FIELD_OF_VIEW: Tag = Tag(17);
/// Sensor Relative Azimuth Angle
pub const SENSOR_RELATIVE_AZIMUTH_ANGLE: Tag = Tag(18);
/// Sensor Relative Elevation Angle
pub const SENSOR_RELATIVE_ELEVATION_ANGLE: Tag = Tag(19);
/// Sensor Relative Roll Angle
pub const SENSOR_RELATIVE_ROLL_ANGLE: Tag = Tag(20);
/// Slant Range
pub const SLANT_RANGE: Tag = Tag(21);
/// Target Width
pub const TARGET_WIDTH: Tag = Tag(22);
/// Frame Center Latitude
pub const FRAME_CENTER_LATITUDE: Tag = Tag(23);
/// Frame Center Longitude
pub const FRAME_CENTER_LONGITUDE: Tag = Tag(24);
/// Frame Center Elevation
pub const FRAME_CENTER_ELEVATION: Tag = Tag(25);
/// Target Location Latitude
pub const TARGET_LOCATION_LATITUDE: Tag = Tag(40);
/// Target Location Longitude
pub const TARGET_LOCATION_LONGITUDE: Tag = Tag(41);
/// Target Location Elevation
pub const TARGET_LOCATION_ELEVATION: Tag = Tag(42);
/// Security Local Set
pub const SECURITY_LOCAL_SET: Tag = Tag(48);
/// UAS Datalink LS Version Number
pub const UAS_DATALINK_LS_VERSION_NUMBER: Tag = Tag(65);
/// MIIS Core Identifier
pub const MIIS_CORE_IDENTIFIER: Tag = Tag(94);
