use runfast_cli::run;
use serial_test::serial;

fn exit_code(args: &[&str]) -> i32 {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(args, &mut out, &mut err)
}

#[test]
fn classify_valid_and_invalid() {
    assert_eq!(exit_code(&["runfast", "classify", "3H", "4D", "5S", "6C", "7H"]), 0);
    assert_eq!(exit_code(&["runfast", "classify", "3H", "4D"]), 2);
    assert_eq!(exit_code(&["runfast", "classify", "ZZ"]), 2);
}

#[test]
fn missing_arguments_are_usage_errors() {
    assert_eq!(exit_code(&["runfast"]), 2);
    assert_eq!(exit_code(&["runfast", "classify"]), 2);
    assert_eq!(exit_code(&["runfast", "sim"]), 2);
}

#[test]
fn zero_games_is_rejected() {
    assert_eq!(exit_code(&["runfast", "sim", "--games", "0"]), 2);
}

#[test]
fn rng_always_succeeds() {
    assert_eq!(exit_code(&["runfast", "rng", "--seed", "5"]), 0);
}

#[test]
#[serial]
fn bad_environment_fails_cfg() {
    unsafe {
        std::env::set_var("RUNFAST_SEATS", "nine");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["runfast", "cfg"], &mut out, &mut err);
    unsafe {
        std::env::remove_var("RUNFAST_SEATS");
    }
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Invalid seats"));
}

#[test]
#[serial]
fn deal_rejects_too_many_seats() {
    unsafe {
        std::env::remove_var("RUNFAST_SEATS");
    }
    assert_eq!(exit_code(&["runfast", "deal", "--seats", "5"]), 2);
    assert_eq!(exit_code(&["runfast", "deal", "--seats", "4", "--seed", "1"]), 0);
}
