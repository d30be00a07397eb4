//! Property-based tests for the diagnostics parsers
//!
//! Inputs are generated in the layout each utility prints, with random column
//! padding, and compared against the values used to build them.

use std::time::Duration;

use mikrus_core::{
    DiskSpace, Utility, parse_disk_space, parse_memory_usage, parse_process_list, parse_uptime,
};
use proptest::prelude::*;

// ========== Strategies ==========

/// One to eight spaces, the way `free` and `ps` pad their columns
fn arb_pad() -> impl Strategy<Value = String> {
    (1usize..8).prop_map(|n| " ".repeat(n))
}

/// A `df` size such as `9.8G` or `512M`
fn arb_size() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..10, prop::sample::select(vec!["K", "M", "G", "T"]))
        .prop_map(|(whole, frac, unit)| format!("{whole}.{frac}{unit}"))
}

/// A single token without whitespace
fn arb_token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9/_.:-]{1,24}"
}

/// A percentage as `ps` prints it
fn arb_percent() -> impl Strategy<Value = f64> {
    (0u32..1000).prop_map(|tenths| f64::from(tenths) / 10.0)
}

/// A command line: a first word followed by arbitrary printable text
fn arb_command() -> impl Strategy<Value = String> {
    ("[a-z/\\\\_]{1,16}", "[ -~]{0,40}").prop_map(|(head, tail)| {
        format!("{head}{}", tail.trim_end())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========== free ==========

    #[test]
    fn memory_fields_are_positional(
        mem in prop::array::uniform6(any::<u64>()),
        swap in prop::array::uniform3(any::<u64>()),
        pad in arb_pad(),
    ) {
        let output = format!(
            "{pad}total used free shared buff/cache available\n\
             Mem:{pad}{}\nSwap:{pad}{}\n",
            mem.map(|v| v.to_string()).join(pad.as_str()),
            swap.map(|v| v.to_string()).join(pad.as_str()),
        );
        let usage = parse_memory_usage(&output).unwrap();
        prop_assert_eq!(
            [usage.total, usage.used, usage.free, usage.shared, usage.cache, usage.available],
            mem
        );
        prop_assert_eq!([usage.swap_total, usage.swap_used, usage.swap_free], swap);
    }

    #[test]
    fn memory_short_input_is_error(lines in prop::collection::vec("[ -~]{0,40}", 0..2)) {
        let err = parse_memory_usage(&lines.join("\n")).unwrap_err();
        prop_assert_eq!(err.utility(), Utility::Free);
    }

    // ========== df ==========

    #[test]
    fn disk_row_is_copied_verbatim(
        filesystem in arb_token(),
        size in arb_size(),
        used in arb_size(),
        available in arb_size(),
        percent in 0u8..=100,
        mount in "/[a-z/]{0,20}",
        pad in arb_pad(),
    ) {
        let usage = format!("{percent}%");
        let output = format!(
            "Filesystem Size Used Avail Use% Mounted on\n\
             {filesystem}{pad}{size}{pad}{used}{pad}{available}{pad}{usage}{pad}{mount}\n\
             tmpfs 64M 0 64M 0% /dev\n"
        );
        let disk = parse_disk_space(&output).unwrap();
        prop_assert_eq!(
            &disk,
            &DiskSpace { filesystem, size, used, available, usage, mounted_on: mount }
        );
        prop_assert_eq!(parse_disk_space(&disk.to_string()).unwrap(), disk);
    }

    // ========== uptime ==========

    #[test]
    fn uptime_duration_is_reconstructed(
        days in 0u64..5000,
        hours in 0u64..24,
        minutes in 0u64..60,
        users in 0u32..500,
        loads in prop::array::uniform3(0u32..10_000),
    ) {
        let since = match (days, hours) {
            (0, _) => format!("{hours}:{minutes:02}"),
            (1, 0) => format!("1 day, {minutes} min"),
            (_, 0) => format!("{days} days, {minutes} min"),
            (1, _) => format!("1 day,  {hours}:{minutes:02}"),
            _ => format!("{days} days,  {hours}:{minutes:02}"),
        };
        let user_word = if users == 1 { "user" } else { "users" };
        let [l1, l5, l15] = loads.map(|l| f64::from(l) / 100.0);
        let line = format!(
            " 16:32:02 up {since},  {users} {user_word},  load average: {l1:.2}, {l5:.2}, {l15:.2}"
        );

        let report = parse_uptime(&line).unwrap();
        prop_assert_eq!(
            report.uptime,
            Duration::from_secs(days * 86_400 + hours * 3600 + minutes * 60)
        );
        prop_assert_eq!(report.users, users);
        prop_assert!((report.load_1min - l1).abs() < 1e-9);
        prop_assert!((report.load_5min - l5).abs() < 1e-9);
        prop_assert!((report.load_15min - l15).abs() < 1e-9);
    }

    // ========== ps ==========

    #[test]
    fn process_rows_keep_command_text(
        rows in prop::collection::vec(
            (arb_token(), 1u64..4_194_304, arb_percent(), arb_percent(), any::<u32>(), any::<u32>(), arb_command()),
            0..12,
        ),
        trailing_newline in any::<bool>(),
    ) {
        let mut output =
            String::from("USER       PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND");
        for (user, pid, cpu, mem, vsz, rss, command) in &rows {
            output.push_str(&format!(
                "\n{user:<8} {pid:>5} {cpu:>4.1} {mem:>4.1} {vsz:>6} {rss:>5} ?        Ss   Jun05   0:00 {command}"
            ));
        }
        if trailing_newline {
            output.push('\n');
        }

        let list = parse_process_list(&output).unwrap();
        prop_assert_eq!(list.len(), rows.len());
        for (record, (user, pid, cpu, mem, vsz, rss, command)) in list.iter().zip(&rows) {
            prop_assert_eq!(&record.user, user);
            prop_assert_eq!(record.pid, *pid);
            prop_assert!((record.cpu_percent - cpu).abs() < 1e-9);
            prop_assert!((record.memory_percent - mem).abs() < 1e-9);
            prop_assert_eq!(record.virtual_memory_size, u64::from(*vsz));
            prop_assert_eq!(record.resident_set_size, u64::from(*rss));
            prop_assert_eq!(&record.command, command);
        }
    }

    // ========== Robustness ==========

    #[test]
    fn parsers_never_panic(input in "\\PC{0,400}") {
        let _ = parse_memory_usage(&input);
        let _ = parse_disk_space(&input);
        let _ = parse_uptime(&input);
        let _ = parse_process_list(&input);
    }

    #[test]
    fn error_excerpt_is_bounded(noise in "[a-z ]{300,600}") {
        let err = parse_uptime(&noise).unwrap_err();
        let message = err.to_string();
        prop_assert!(message.contains('…'));
        prop_assert!(message.chars().count() < 400);
    }
}
