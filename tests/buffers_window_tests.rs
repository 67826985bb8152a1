use pulsewatch::buffers::RollingWindow;

#[test]
fn test_window_evicts_oldest() {
    let mut window: RollingWindow = RollingWindow::new(3);

    assert_eq!(window.push(1.0), None);
    assert_eq!(window.push(2.0), None);
    assert_eq!(window.push(3.0), None);
    assert!(window.is_full());

    assert_eq!(window.push(4.0), Some(1.0));
    assert_eq!(window.to_vec(), vec![2.0, 3.0, 4.0]);
    assert_eq!(window.len(), 3);
    assert_eq!(window.latest(), Some(&4.0));
    assert_eq!(window.get(0), Some(&2.0));
}

#[test]
fn test_window_statistics() {
    let mut window: RollingWindow = RollingWindow::new(8);
    assert_eq!(window.mean(), 0.0);
    assert_eq!(window.population_std_dev(), 0.0);

    for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
        window.push(value);
    }
    assert_eq!(window.mean(), 5.0);
    assert_eq!(window.population_std_dev(), 2.0);
}

#[test]
fn test_statistics_follow_eviction() {
    let mut window: RollingWindow = RollingWindow::new(2);
    window.push(100.0);
    window.push(200.0);
    window.push(300.0);

    assert_eq!(window.mean(), 250.0);
    assert_eq!(window.population_std_dev(), 50.0);
}

#[test]
fn test_window_holds_any_sample_type() {
    let mut window = RollingWindow::new(2);
    window.push("a");
    window.push("b");
    window.push("c");
    assert_eq!(window.to_vec(), vec!["b", "c"]);

    window.clear();
    assert!(window.is_empty());
    assert_eq!(window.capacity(), 2);
}
