//! The five demo zones with their sensors, lights and appliances.

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::meter::SensorStatus;
use ecosmart_domain::zone::{
    ApplianceKind, LightKind, Zone, ZoneAppliance, ZoneLight, ZoneSensor, ZoneSensorKind,
};

/// Lights are described as `(id, name, kind, on, brightness, dimmable, watts)`.
type LightRow = (&'static str, &'static str, LightKind, bool, u8, bool, f64);

/// Appliances are described as `(id, name, icon, kind, on, watts)`.
type ApplianceRow = (
    &'static str,
    &'static str,
    &'static str,
    ApplianceKind,
    bool,
    f64,
);

fn lights(rows: &[LightRow]) -> Result<Vec<ZoneLight>, EcoSmartError> {
    rows.iter()
        .map(|&(id, name, kind, on, brightness, dimmable, watts)| {
            ZoneLight::builder()
                .id(id)
                .name(name)
                .kind(kind)
                .on(on)
                .brightness(brightness)
                .dimmable(dimmable)
                .power_draw(watts)
                .build()
        })
        .collect()
}

fn appliances(rows: &[ApplianceRow]) -> Result<Vec<ZoneAppliance>, EcoSmartError> {
    rows.iter()
        .map(|&(id, name, icon, kind, on, watts)| {
            ZoneAppliance::builder()
                .id(id)
                .name(name)
                .icon(icon)
                .kind(kind)
                .on(on)
                .power_draw(watts)
                .build()
        })
        .collect()
}

fn zone(
    id: &str,
    name: &str,
    icon: &str,
    color: &str,
    sensors: Vec<ZoneSensor>,
    lights: Vec<ZoneLight>,
    appliances: Vec<ZoneAppliance>,
) -> Result<Zone, EcoSmartError> {
    let mut builder = Zone::builder()
        .id(id)
        .name(name)
        .icon(icon)
        .accent_color(color);
    for sensor in sensors {
        builder = builder.sensor(sensor);
    }
    for light in lights {
        builder = builder.light(light);
    }
    for appliance in appliances {
        builder = builder.appliance(appliance);
    }
    builder.build()
}

fn living_room() -> Result<Zone, EcoSmartError> {
    let mut lamps = lights(&[
        ("l-lr-main", "Main Chandelier", LightKind::Main, true, 80, true, 60.0),
        ("l-lr-tv", "TV Backlight", LightKind::Accent, false, 100, true, 15.0),
        ("l-lr-floor", "Floor Lamp", LightKind::Spot, true, 100, false, 12.0),
    ])?;
    lamps[1].color = Some("#8b5cf6".to_string());

    zone(
        "zone-lr",
        "Living Room",
        "Sofa",
        "#8b5cf6",
        vec![
            ZoneSensor::new("s-lr-temp", ZoneSensorKind::Temp, "Temp", 22.0).with_unit("°C"),
            ZoneSensor::new("s-lr-mot", ZoneSensorKind::Motion, "Occupancy", "Active"),
            ZoneSensor::new("s-lr-lux", ZoneSensorKind::Lux, "Light", 450.0).with_unit("lx"),
        ],
        lamps,
        appliances(&[
            ("a-lr-ac", "Air Conditioner", "Fan", ApplianceKind::Climate, true, 1200.0),
            ("a-lr-tv", "Smart TV", "Tv", ApplianceKind::Media, false, 120.0),
        ])?,
    )
}

fn kitchen() -> Result<Zone, EcoSmartError> {
    zone(
        "zone-kt",
        "Kitchen",
        "ChefHat",
        "#f97316",
        vec![
            ZoneSensor::new("s-kt-smoke", ZoneSensorKind::Smoke, "Smoke", "Clear"),
            ZoneSensor::new("s-kt-gas", ZoneSensorKind::Gas, "Gas Leak", "None"),
            ZoneSensor::new("s-kt-leak", ZoneSensorKind::Leak, "Water Leak", "Dry"),
        ],
        lights(&[
            ("l-kt-spot", "Ceiling Spots", LightKind::Main, true, 100, false, 40.0),
            ("l-kt-cab", "Cabinet LEDs", LightKind::Accent, true, 60, true, 15.0),
            ("l-kt-tbl", "Dining Table", LightKind::Main, false, 100, true, 25.0),
        ])?,
        appliances(&[
            (
                "a-kt-fridge",
                "Smart Fridge",
                "Refrigerator",
                ApplianceKind::Appliance,
                true,
                150.0,
            ),
            ("a-kt-kettle", "Kettle", "Coffee", ApplianceKind::Appliance, false, 2000.0),
        ])?,
    )
}

fn master_bedroom() -> Result<Zone, EcoSmartError> {
    zone(
        "zone-mb",
        "Master Bedroom",
        "BedDouble",
        "#ec4899",
        vec![
            ZoneSensor::new("s-mb-co2", ZoneSensorKind::Co2, "CO₂", 850.0).with_unit("ppm"),
            ZoneSensor::new("s-mb-temp", ZoneSensorKind::Temp, "Temp", 21.0).with_unit("°C"),
            ZoneSensor::new("s-mb-hum", ZoneSensorKind::Humidity, "Humidity", 40.0)
                .with_unit("%"),
        ],
        lights(&[
            ("l-mb-main", "Main Light", LightKind::Main, false, 100, true, 30.0),
            ("l-mb-bed-l", "Bedside Left", LightKind::Spot, false, 30, true, 8.0),
            ("l-mb-bed-r", "Bedside Right", LightKind::Spot, true, 30, true, 8.0),
            ("l-mb-ward", "Wardrobe", LightKind::Accent, false, 100, false, 10.0),
        ])?,
        appliances(&[(
            "a-mb-humid",
            "Humidifier",
            "Droplets",
            ApplianceKind::Climate,
            true,
            45.0,
        )])?,
    )
}

fn bathroom() -> Result<Zone, EcoSmartError> {
    zone(
        "zone-bath",
        "Bathroom",
        "Bath",
        "#06b6d4",
        vec![
            ZoneSensor::new("s-ba-hum", ZoneSensorKind::Humidity, "Humidity", 65.0)
                .with_unit("%")
                .with_status(SensorStatus::Warning),
            ZoneSensor::new("s-ba-leak", ZoneSensorKind::Leak, "Leak Sensor", "Dry"),
            ZoneSensor::new("s-ba-mot", ZoneSensorKind::Motion, "Motion", "None"),
        ],
        lights(&[
            ("l-ba-main", "Main Light", LightKind::Main, false, 100, false, 20.0),
            ("l-ba-mir", "Vanity Mirror", LightKind::Spot, false, 100, false, 15.0),
        ])?,
        Vec::new(),
    )
}

fn outdoor() -> Result<Zone, EcoSmartError> {
    zone(
        "zone-out",
        "Outdoor / Garden",
        "Trees",
        "#10b981",
        vec![
            ZoneSensor::new("s-out-mot", ZoneSensorKind::Motion, "Driveway", "Clear"),
            ZoneSensor::new("s-out-day", ZoneSensorKind::Daylight, "Light Lvl", "Dusk"),
            ZoneSensor::new("s-out-gate", ZoneSensorKind::Gate, "Main Gate", "Closed"),
        ],
        lights(&[
            ("l-out-porch", "Porch Light", LightKind::Main, true, 100, false, 15.0),
            ("l-out-path", "Garden Path", LightKind::Accent, true, 100, false, 30.0),
            ("l-out-flood", "Garage Flood", LightKind::Spot, false, 100, false, 50.0),
        ])?,
        Vec::new(),
    )
}

/// The demo house, in display order.
///
/// # Errors
///
/// Returns [`EcoSmartError::Validation`] if a seed entry breaks a domain
/// invariant.
pub fn house_zones() -> Result<Vec<Zone>, EcoSmartError> {
    Ok(vec![
        living_room()?,
        kitchen()?,
        master_bedroom()?,
        bathroom()?,
        outdoor()?,
    ])
}
