use motion_common::types::MotionChannel;
use motion_display::Dashboard;
use motion_sensors::services;
use tokio::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let run_for_millis = 20_000;

    // Two mock channels standing in for the device and headphone sensors
    let (handle_device, device) =
        services::run_mock_service("Device", 66.7, true, None, Some(run_for_millis)).unwrap();
    let (handle_headphones, headphones) =
        services::run_mock_service("Headphones", 40.0, true, None, Some(run_for_millis)).unwrap();

    let mut dashboard = Dashboard::new();
    dashboard.add_tab(MotionChannel::Device, device.clone());
    dashboard.add_tab(MotionChannel::Headphones, headphones.clone());

    let refresh_period = Duration::from_millis(500);
    for frame in 0..(run_for_millis / 500) {
        // Flip the unit toggle halfway through the run
        if frame == run_for_millis / 1000 {
            dashboard.toggle_angle_type();
        }
        print!("\x1B[2J\x1B[H");
        println!("{}", dashboard.render());
        tokio::time::sleep(refresh_period).await;
    }

    handle_device.await.unwrap();
    handle_headphones.await.unwrap();
}
