//! Telemetry snapshot data model.
//!
//! Every type here is a plain data carrier mirroring the JSON document served by
//! the ETS2 telemetry server. Field names follow the server's camelCase keys on
//! the wire; every field is optional and decodes to its zero value when absent.
//!
//! Units are passed through exactly as the game reports them.

use serde::{Deserialize, Serialize};

/// One complete telemetry reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    /// Game connection state and simulation clock
    pub game: Game,
    /// Current truck state
    pub truck: Truck,
    /// Attached trailer, zeroed when none is attached
    pub trailer: Trailer,
    /// Active job, zeroed when no job is taken
    pub job: Job,
    /// Route advisor state
    pub navigation: Navigation,
}

/// World placement: position plus orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Three-component vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    /// Whether the telemetry server is connected to a running game
    pub connected: bool,
    pub paused: bool,
    /// Name of the running game, e.g. "ets2" or "ats"
    pub game_name: String,
    /// Absolute in-game time (opaque, producer-defined format)
    pub time: String,
    /// Scale applied to distance and time to compensate for the scale of the map
    pub time_scale: f32,
    /// Absolute in-game time of the next required rest stop (opaque)
    pub next_rest_stop_time: String,
    /// Game version, "major.minor"
    pub version: String,
    /// Telemetry plugin version
    pub telemetry_plugin_version: String,
}

/// Flat truck state record.
///
/// Control inputs come in two flavours: `user_*` is the raw value received from
/// the input device, `game_*` is the value the simulation actually uses after
/// interpolation, press-attack curves and cruise control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Truck {
    /// Brand id: "daf", "iveco", "man", "mercedes", "renault", "scania", "volvo", ...
    pub id: String,
    /// Localized brand name
    pub make: String,
    /// Localized model name
    pub model: String,

    /// Speed in km/h
    pub speed: f32,
    /// Cruise control set speed in km/h
    pub cruise_control_speed: f32,
    pub cruise_control_on: bool,
    /// Odometer in km
    pub odometer: f32,

    /// Physical gear. Positive is forward, negative is reverse, 0 is neutral
    pub gear: i64,
    /// Gear shown on the dashboard, same sign convention as `gear`
    pub displayed_gear: i64,
    /// Forward gear count on an undamaged truck
    pub forward_gears: i64,
    /// Reverse gear count on an undamaged truck
    pub reverse_gears: i64,
    /// "arcade", "automatic", "manual" or "hshifter"
    pub shifter_type: String,

    /// Engine speed in rev/min
    pub engine_rpm: f32,
    /// Maximum engine speed in rev/min
    pub engine_rpm_max: f32,

    /// Fuel in liters
    pub fuel: f32,
    /// Fuel tank capacity in liters
    pub fuel_capacity: f32,
    /// Average fuel consumption in liters/km
    pub fuel_average_consumption: f32,
    /// Fraction of capacity below which the low fuel warning activates
    pub fuel_warning_factor: f32,
    pub fuel_warning_on: bool,

    /// Engine wear, 0 (pristine) to 1 (destroyed)
    pub wear_engine: f32,
    /// Transmission wear, 0..1
    pub wear_transmission: f32,
    /// Cabin wear, 0..1
    pub wear_cabin: f32,
    /// Chassis wear, 0..1
    pub wear_chassis: f32,
    /// Wheel wear, 0..1
    pub wear_wheels: f32,

    /// Raw steering input, -1..1, counterclockwise positive
    pub user_steer: f32,
    /// Raw throttle input, -1..1
    pub user_throttle: f32,
    /// Raw brake input, -1..1
    pub user_brake: f32,
    /// Raw clutch input, -1..1
    pub user_clutch: f32,

    /// Simulated steering, -1..1, counterclockwise positive
    pub game_steer: f32,
    /// Simulated throttle pedal, 0..1
    pub game_throttle: f32,
    /// Simulated brake pedal, 0..1. Excludes retarder, parking and motor brake
    pub game_brake: f32,
    /// Simulated clutch pedal, 0..1
    pub game_clutch: f32,

    /// H-shifter slot; 0 when no slot is selected
    pub shifter_slot: i64,
    pub engine_on: bool,
    pub electric_on: bool,
    pub wipers_on: bool,

    /// Current retarder level, 0..=`retarder_step_count`
    pub retarder_brake: i64,
    /// Retarder step count; 0 when no retarder is mounted
    pub retarder_step_count: i64,
    pub park_brake_on: bool,
    pub motor_brake_on: bool,
    /// Brake temperature in °C
    pub brake_temperature: f32,

    /// AdBlue in liters
    pub adblue: f32,
    /// AdBlue tank capacity in liters
    pub adblue_capacity: f32,
    /// Average AdBlue consumption in liters/km
    pub adblue_average_consumption: f32,
    pub adblue_warning_on: bool,

    /// Brake air tank pressure in psi
    pub air_pressure: f32,
    pub air_pressure_warning_on: bool,
    /// Pressure in psi below which the air pressure warning activates
    pub air_pressure_warning_value: f32,
    /// Emergency brakes engaged because of low air pressure
    pub air_pressure_emergency_on: bool,
    /// Pressure in psi below which the emergency brakes engage.
    ///
    /// The telemetry server publishes this under a misspelled key which is kept
    /// on the wire; the correct spelling is accepted when decoding.
    #[serde(
        rename = "airPressureEmegrencyValue",
        alias = "airPressureEmergencyValue"
    )]
    pub air_pressure_emergency_value: f32,

    /// Oil temperature in °C
    pub oil_temperature: f32,
    /// Oil pressure in psi
    pub oil_pressure: f32,
    pub oil_pressure_warning_on: bool,
    /// Oil pressure in psi below which the warning activates
    pub oil_pressure_warning_level: f32,

    /// Coolant temperature in °C
    pub water_temperature: f32,
    pub water_temperature_warning_on: bool,
    /// Coolant temperature in °C above which the warning activates
    pub water_temperature_warning_level: f32,

    /// Battery voltage in volts
    pub battery_voltage: f32,
    pub battery_voltage_warning_on: bool,
    /// Voltage below which the battery warning activates
    pub battery_voltage_warning_value: f32,

    /// Dashboard backlight intensity, 0 (off) to 1 (max)
    pub lights_dashboard_value: f32,
    pub lights_dashboard_on: bool,

    /// Left blinker is currently emitting light
    pub blinker_left_active: bool,
    /// Right blinker is currently emitting light
    pub blinker_right_active: bool,
    /// Left blinker is switched on
    pub blinker_left_on: bool,
    /// Right blinker is switched on
    pub blinker_right_on: bool,

    pub lights_parking_on: bool,
    pub lights_beam_low_on: bool,
    pub lights_beam_high_on: bool,
    pub lights_aux_front_on: bool,
    pub lights_aux_roof_on: bool,
    pub lights_beacon_on: bool,
    pub lights_brake_on: bool,
    pub lights_reverse_on: bool,

    /// Truck placement in the game world
    pub placement: Placement,

    /// Linear acceleration in vehicle space, m/s²
    pub acceleration: Vector,
    /// Default head position in cabin space
    pub head: Vector,
    /// Cabin rotation joint in vehicle space; zero if the truck has no separate cabin
    pub cabin: Vector,
    /// Trailer hook position in vehicle space
    pub hook: Vector,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trailer {
    pub attached: bool,
    /// Internal cargo id
    pub id: String,
    /// Cargo mass in kg
    pub mass: f32,
    /// Trailer wear, 0..1
    pub wear: f32,
    pub placement: Placement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    /// Reward in game currency
    pub income: i64,
    /// Absolute in-game time at which the delivery becomes late (opaque)
    pub deadline_time: String,
    /// In-game time left before the deadline (opaque)
    pub remaining_time: String,
    pub source_city: String,
    pub source_company: String,
    pub destination_city: String,
    pub destination_company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Navigation {
    /// Estimated time of arrival, relative (opaque)
    pub estimated_time: String,
    /// Estimated distance to destination in meters
    pub estimated_distance: i64,
    /// Route advisor speed limit in km/h
    pub speed_limit: i64,
}
