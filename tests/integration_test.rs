//! Full end-to-end tests with all real actors and compressed timings.

use std::time::Duration;

use cafe_click::clients::actor_client::ActorClient;
use cafe_click::lifecycle::CafeSystem;
use cafe_click::model::{CartLine, Category, Customizations, MenuItemCreate, OrderStatus, Role, SpiceLevel, UserCreate};
use cafe_click::session::{SessionConfig, SessionEvent};
use cafe_click::verification::Verdict;
use tokio::time::timeout;

/// Millisecond-scale timings so the whole journey runs in well under a
/// second of wall time. The tick crossing into pickup range (the third, at
/// 225ms) still lands after `ready` (200ms), as in the real timeline.
fn fast_config() -> SessionConfig {
    SessionConfig {
        preparing_delay: Duration::from_millis(50),
        ready_delay: Duration::from_millis(200),
        proximity_tick: Duration::from_millis(75),
        token_rotation: Duration::from_secs(60),
        ..SessionConfig::default()
    }
}

async fn next_event(
    events: &mut tokio::sync::broadcast::Receiver<SessionEvent>,
) -> SessionEvent {
    timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("Timed out waiting for a session event")
        .expect("Event stream closed")
}

#[tokio::test]
async fn full_customer_journey() {
    let system = CafeSystem::start(fast_config())
        .await
        .expect("Failed to start system");
    let mut events = system.session_client.subscribe();

    // Sign in with the demo matric number.
    let user = system
        .user_client
        .login("2012345", "123")
        .await
        .expect("Login failed");
    assert_eq!(user.role, Role::Customer);

    // The catalog hides the out-of-stock Chicken Chop.
    let catalog = system.menu_client.catalog().await.unwrap();
    assert_eq!(catalog.len(), 5);
    assert!(catalog.iter().all(|item| item.name != "Chicken Chop"));

    // Order 2x Nasi Goreng USA with egg plus an Iced Milo.
    let nasi = catalog.iter().find(|i| i.name == "Nasi Goreng USA").unwrap();
    let milo = catalog.iter().find(|i| i.name == "Iced Milo").unwrap();
    let lines = vec![
        CartLine::new(nasi.id.clone(), nasi.name.clone(), nasi.price, 2).with_customizations(
            Customizations {
                add_egg: true,
                spice_level: SpiceLevel::Hot,
            },
        ),
        CartLine::new(milo.id.clone(), milo.name.clone(), milo.price, 1),
    ];
    let order = system
        .session_client
        .place_order(lines, "mahallah_1".to_string())
        .await
        .expect("Failed to place order");
    assert_eq!(order.status, OrderStatus::Sent);
    assert!((order.total - 15.50).abs() < f64::EPSILON);

    // Walk over while the kitchen works.
    let start = system.session_client.start_tracking().await.unwrap();
    assert!(!start.is_nearby);

    assert_eq!(
        next_event(&mut events).await,
        SessionEvent::OrderReady {
            order_id: order.id.clone()
        }
    );
    match next_event(&mut events).await {
        SessionEvent::ArrivalNearby {
            order_id,
            distance_km,
        } => {
            assert_eq!(order_id, order.id);
            assert!(distance_km <= 0.5);
        }
        other => panic!("Expected arrival notification, got {other:?}"),
    }

    // At the counter: a wrong code is refused, the shown one accepted.
    let token = system.session_client.declare_arrival().await.unwrap();
    assert!(token.code.starts_with(&format!("PICKUP-{}-", order.id)));

    let verdict = system
        .session_client
        .verify_code("PICKUP-0000-1".to_string())
        .await
        .unwrap();
    assert_eq!(verdict, Verdict::Rejected);

    let verdict = system.session_client.verify_code(token.code).await.unwrap();
    assert_eq!(verdict, Verdict::Accepted);
    assert_eq!(
        next_event(&mut events).await,
        SessionEvent::OrderCollected {
            order_id: order.id.clone()
        }
    );

    // Review ends the order's life.
    system
        .session_client
        .submit_review(5, "Sedap!".to_string())
        .await
        .unwrap();
    assert_eq!(system.session_client.order_snapshot().await.unwrap(), None);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn staff_dashboard_flows() {
    let system = CafeSystem::start(SessionConfig::default()).await.unwrap();

    // Staff sign in with their staff number.
    let staff = system.user_client.login("STF001", "123").await.unwrap();
    assert_eq!(staff.role, Role::Staff);

    // Toggle the stall closed and back open.
    let venues = system.venue_client.list().await.unwrap();
    assert_eq!(venues.len(), 6);
    let asiah = venues.iter().find(|v| v.name == "Mahallah Asiah").unwrap();
    assert!(asiah.open);
    assert!(!system.venue_client.toggle_stall(asiah.id.clone()).await.unwrap());
    assert!(system.venue_client.toggle_stall(asiah.id.clone()).await.unwrap());

    // Bring the Chicken Chop back in stock; it reappears in the catalog.
    let all_items = system.menu_client.list().await.unwrap();
    let chop = all_items.iter().find(|i| i.name == "Chicken Chop").unwrap();
    assert!(system
        .menu_client
        .toggle_availability(chop.id.clone())
        .await
        .unwrap());
    let catalog = system.menu_client.catalog().await.unwrap();
    assert_eq!(catalog.len(), 6);

    // Edit name and price.
    let updated = system
        .menu_client
        .edit_item(chop.id.clone(), None, Some(9.50))
        .await
        .unwrap();
    assert_eq!(updated.name, "Chicken Chop");
    assert!((updated.price - 9.50).abs() < f64::EPSILON);

    // Invalid edits are refused without changing the item.
    let err = system
        .menu_client
        .edit_item(chop.id.clone(), Some(String::new()), None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("name"));

    // Add a new dish and delete it again.
    let new_id = system
        .menu_client
        .add_item(MenuItemCreate {
            name: "Roti Canai".to_string(),
            price: 1.50,
            category: Category::Western,
            popular: false,
            available: true,
        })
        .await
        .unwrap();
    assert_eq!(system.menu_client.list().await.unwrap().len(), 7);
    system.menu_client.delete(new_id).await.unwrap();
    assert_eq!(system.menu_client.list().await.unwrap().len(), 6);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn registration_and_login_failures() {
    let system = CafeSystem::start(SessionConfig::default()).await.unwrap();

    let params = UserCreate {
        name: "Nurul".to_string(),
        email: "nurul@iium.edu.my".to_string(),
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
        role: Role::Customer,
        matric_no: Some("2098765".to_string()),
        staff_no: None,
    };
    system.user_client.register(params.clone()).await.unwrap();

    // The new account can sign in by matric number straight away.
    let user = system.user_client.login("2098765", "abc").await.unwrap();
    assert_eq!(user.name, "Nurul");

    // Registering the same identity twice is refused.
    assert!(system.user_client.register(params).await.is_err());

    // Wrong password and unknown identifier both fail.
    assert!(system.user_client.login("2098765", "wrong").await.is_err());
    assert!(system.user_client.login("nobody", "abc").await.is_err());

    system.shutdown().await.unwrap();
}
