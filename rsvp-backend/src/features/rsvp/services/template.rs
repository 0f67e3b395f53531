// rsvp-backend/src/features/rsvp/services/template.rs

use crate::features::rsvp::models::{GuestEntry, ValidatedRsvp};

/// 新郎新婦に送るRSVP通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpNotification {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl RsvpNotification {
    pub fn render(rsvp: &ValidatedRsvp) -> Self {
        Self {
            subject: render_subject(rsvp),
            text_body: render_text_body(rsvp),
            html_body: render_html_body(rsvp),
        }
    }
}

/// 件名: 先頭2名の氏名と、3名以上なら "+N"
fn render_subject(rsvp: &ValidatedRsvp) -> String {
    let lead_names = rsvp
        .guests
        .iter()
        .take(2)
        .map(GuestEntry::full_name)
        .collect::<Vec<_>>()
        .join(", ");

    let suffix = match rsvp.guest_count() {
        n if n > 2 => format!(" +{}", n - 2),
        _ => String::new(),
    };

    format!(
        "RSVP — {} person(a) — {}{}",
        rsvp.guest_count(),
        lead_names,
        suffix
    )
}

fn totals_line(rsvp: &ValidatedRsvp) -> String {
    format!(
        "{} (Po: {}, Jo: {})",
        rsvp.guest_count(),
        rsvp.attending_count(),
        rsvp.declining_count()
    )
}

fn render_text_body(rsvp: &ValidatedRsvp) -> String {
    let list = rsvp
        .guests
        .iter()
        .enumerate()
        .map(|(i, guest)| {
            format!(
                "{}. {} {} — {}",
                i + 1,
                guest.first_name,
                guest.last_name,
                guest.attendance.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "RSVP i ri\nOrari: {}\nTotali i të ftuarve: {}\n\n{}",
        rsvp.scheduled_time,
        totals_line(rsvp),
        list
    )
}

fn render_html_body(rsvp: &ValidatedRsvp) -> String {
    let items: String = rsvp
        .guests
        .iter()
        .enumerate()
        .map(|(i, guest)| {
            format!(
                "<li><strong>{}.</strong> <strong>{} {}</strong> — {}</li>",
                i + 1,
                escape_html(&guest.first_name),
                escape_html(&guest.last_name),
                guest.attendance.label()
            )
        })
        .collect();

    format!(
        r#"<h2>RSVP i ri</h2>
<p><strong>Orari:</strong> {time}</p>
<p><strong>Totali i të ftuarve:</strong> {totals}</p>
<ol>
{items}
</ol>"#,
        time = escape_html(&rsvp.scheduled_time),
        totals = totals_line(rsvp),
        items = items
    )
}

/// HTML 用の最小限のエスケープ。& は最初に置換すること
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
