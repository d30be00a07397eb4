//! End-to-end check of the `stats` endpoint: raw JSON through the client into
//! parsed diagnostics

use std::time::Duration;

use mikrus_core::{MikrusClient, RawStats};
use secrecy::SecretString;

use super::stub::serve_once;

/// Response captured from a live server, shell chatter included
const STATS_RESPONSE: &str = r#"{
    "free": "total        used        free      shared  buff/cache   available\nMem:           1024          43         816           0         164         980\nSwap:             0           0           0",
    "df": "Filesystem                        Size  Used Avail Use% Mounted on\n/dev/mapper/pve-vm--230--disk--0  9.8G  2.7G  6.7G  29% /\nudev                               63G     0   63G   0% /dev/net",
    "uptime": "16:32:02 up 6 days,  8:33,  0 users,  load average: 0.00, 0.00, 0.00\nsh: 1: echo",
    "ps": ": not found\nUSER       PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND\nroot     21605  0.0  0.3   9504  3368 ?        S    16:32   0:00 bash -c cat | sh\nroot     21607  0.0  0.0   2608   596 ?        S    16:32   0:00  \\_ sh\nroot     21612  0.0  0.3  11420  3264 ?        R    16:32   0:00      \\_ ps auxf\nroot         1  0.0  1.0 169412 10748 ?        Ss   Jun05   0:04 /sbin/init\nroot        48  0.0  6.0 141148 63436 ?        Ss   Jun05   0:20 /lib/systemd/systemd-journald\nsystemd+    73  0.0  0.7  18376  7616 ?        Ss   Jun05   0:00 /lib/systemd/systemd-networkd\nsystemd+    89  0.0  1.1  23924 12128 ?        Ss   Jun05   0:14 /lib/systemd/systemd-resolved\nroot       103  0.0  0.6 238088  7264 ?        Ssl  Jun05   0:06 /usr/lib/accountsservice/accounts-daemon\nroot       104  0.0  0.2   9344  2796 ?        Ss   Jun05   0:00 /usr/sbin/cron -f\nmessage+   105  0.0  0.3   7404  4100 ?        Ss   Jun05   0:00 /usr/bin/dbus-daemon --system --address=systemd: --nofork --nopidfile --systemd-activation --syslog-only\nroot       108  0.0  1.7  31804 18404 ?        Ss   Jun05   0:00 /usr/bin/python3 /usr/bin/networkd-dispatcher --run-startup-triggers\nsyslog     110  0.0  0.4 154708  4248 ?        Ssl  Jun05   0:01 /usr/sbin/rsyslogd -n -iNONE\nroot       113  0.0  0.5  16440  6124 ?        Ss   Jun05   0:00 /lib/systemd/systemd-logind\nroot       122  0.0  0.2   8132  2144 console  Ss+  Jun05   0:00 /sbin/agetty -o -p -- \\u --noclear --keep-baud console 115200,38400,9600 linux\nroot       123  0.0  0.2   8132  2248 pts/0    Ss+  Jun05   0:00 /sbin/agetty -o -p -- \\u --noclear --keep-baud tty1 115200,38400,9600 linux\nroot       124  0.0  0.2   8132  2132 pts/1    Ss+  Jun05   0:00 /sbin/agetty -o -p -- \\u --noclear --keep-baud tty2 115200,38400,9600 linux\nroot       126  0.0  0.6  12172  7124 ?        Ss   Jun05   0:03 sshd: /usr/sbin/sshd -D [listener] 0 of 10-100 startups"
}"#;

#[tokio::test]
async fn stats_response_parses_into_diagnostics() {
    let (base_url, server) = serve_once("200 OK", STATS_RESPONSE).await;
    let client = MikrusClient::new(SecretString::from("key".to_string()), "a123")
        .unwrap()
        .with_base_url(base_url);

    let raw = client.stats().await.unwrap();
    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /stats HTTP/1.1");

    let diagnostics = raw.diagnostics().unwrap();

    assert_eq!(diagnostics.memory.total, 1024);
    assert_eq!(diagnostics.memory.used, 43);
    assert_eq!(diagnostics.memory.free, 816);
    assert_eq!(diagnostics.memory.cache, 164);
    assert_eq!(diagnostics.memory.available, 980);
    assert_eq!(diagnostics.memory.swap_total, 0);

    assert_eq!(diagnostics.disk.filesystem, "/dev/mapper/pve-vm--230--disk--0");
    assert_eq!(diagnostics.disk.size, "9.8G");
    assert_eq!(diagnostics.disk.usage, "29%");
    assert_eq!(diagnostics.disk.mounted_on, "/");

    assert_eq!(diagnostics.uptime.time, "16:32:02");
    assert_eq!(
        diagnostics.uptime.uptime,
        Duration::from_secs((6 * 24 + 8) * 3600 + 33 * 60)
    );
    assert_eq!(diagnostics.uptime.users, 0);
    assert!(diagnostics.uptime.load_1min.abs() < f64::EPSILON);

    let processes = &diagnostics.processes;
    assert_eq!(processes.len(), 17);
    assert_eq!(processes[0].pid, 21605);
    assert_eq!(processes[0].command, "bash -c cat | sh");
    assert_eq!(processes[1].command, "\\_ sh");
    assert_eq!(processes[2].command, "\\_ ps auxf");
    assert_eq!(processes[5].user, "systemd+");
    assert_eq!(processes[9].user, "message+");
    assert_eq!(
        processes[9].command,
        "/usr/bin/dbus-daemon --system --address=systemd: --nofork --nopidfile --systemd-activation --syslog-only"
    );
    assert_eq!(processes[13].tty, "console");
    assert_eq!(processes[14].tty, "pts/0");
    assert_eq!(processes[16].pid, 126);
    assert_eq!(
        processes[16].command,
        "sshd: /usr/sbin/sshd -D [listener] 0 of 10-100 startups"
    );
}

#[test]
fn stats_json_tolerates_missing_sections() {
    let raw: RawStats = serde_json::from_str(r#"{"free": "x"}"#).unwrap();
    assert_eq!(raw.free, "x");
    assert!(raw.ps.is_empty());
    assert!(raw.diagnostics().is_err());
}
