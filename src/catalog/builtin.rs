use super::{Context, Tag, Tool, ToolCategory};

/// The static built-in exercise catalog. Read-only; per-user visibility is
/// applied on top via `UserData::hidden_tool_ids`.
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        Tool {
            id: "atem_3".into(),
            category: ToolCategory::Beruhigen,
            title: "Du möchtest dich in kurzer Zeit beruhigen und im Moment ankommen.".into(),
            subtitle: "3-Minuten-Atemanker".into(),
            description: "Eine schnelle Atemübung, um dich im Hier und Jetzt zu verankern und dein Nervensystem zu beruhigen.".into(),
            duration_minutes: 3,
            tags: vec![Tag::Atemtraining, Tag::Panikattacke, Tag::Suds],
            contexts: vec![Context::Akut, Context::Unterwegs, Context::Morgen, Context::Abend],
            steps: vec![
                "Finde eine bequeme Position, sitzend oder stehend.".into(),
                "Atme 4 Sekunden lang tief durch die Nase ein.".into(),
                "Halte den Atem für 4 Sekunden an.".into(),
                "Atme 6 Sekunden lang langsam durch den Mund aus.".into(),
                "Wiederhole dies, bis der Timer abgelaufen ist.".into(),
            ],
        },
        Tool {
            id: "body_scan_7".into(),
            category: ToolCategory::Beruhigen,
            title: "Du möchtest deinen Körper spüren und zur Ruhe finden.".into(),
            subtitle: "7-Minuten-Körperscan".into(),
            description: "Lasse dich von einer beruhigenden Stimme durch deinen Körper führen und finde tiefe Entspannung.".into(),
            duration_minutes: 7,
            tags: vec![Tag::Koerperfokus, Tag::Schlaf],
            contexts: vec![Context::Abend, Context::Morgen],
            steps: vec![],
        },
        Tool {
            id: "54321_7".into(),
            category: ToolCategory::Fokussieren,
            title: "Du möchtest dich von deinen Gedanken lösen und deine Sinne schärfen.".into(),
            subtitle: "5-4-3-2-1-Technik".into(),
            description: "Eine intensive Erdungsübung, die deine Sinne aktiviert und dich stark in die Gegenwart zurückholt.".into(),
            duration_minutes: 7,
            tags: vec![Tag::Panikattacke, Tag::Koerperfokus],
            contexts: vec![Context::Akut, Context::Unterwegs],
            steps: vec![
                "Schau dich um und benenne laut 5 Dinge, die du sehen kannst.".into(),
                "Nimm nun 4 Dinge wahr, die du fühlen kannst.".into(),
                "Lausche aufmerksam und identifiziere 3 Geräusche in deiner Umgebung.".into(),
                "Finde 2 Dinge, die du riechen kannst.".into(),
                "Nimm 1 Sache wahr, die du schmecken kannst.".into(),
            ],
        },
        Tool {
            id: "gedanken_stopp_3".into(),
            category: ToolCategory::Fokussieren,
            title: "Du möchtest aus dem Grübelkreislauf aussteigen.".into(),
            subtitle: "3-Minuten-Gedankenstopp".into(),
            description: "Eine kurze Technik, um Grübelschleifen zu unterbrechen und den Fokus neu auszurichten.".into(),
            duration_minutes: 3,
            tags: vec![Tag::Vermeidung],
            contexts: vec![Context::Akut, Context::Unterwegs],
            steps: vec![
                "Sage innerlich oder leise laut: 'STOPP!'.".into(),
                "Visualisiere ein rotes Stoppschild.".into(),
                "Richte deine Aufmerksamkeit sofort auf etwas Konkretes in deiner Umgebung.".into(),
            ],
        },
        Tool {
            id: "progressive_muskelentspannung_15".into(),
            category: ToolCategory::Beruhigen,
            title: "Du möchtest körperlich und mental loslassen.".into(),
            subtitle: "15-Minuten-Progressive Muskelentspannung".into(),
            description: "Lerne durch An- und Entspannung, Muskelverspannungen zu lösen und tiefe körperliche Ruhe zu finden.".into(),
            duration_minutes: 15,
            tags: vec![Tag::Koerperfokus, Tag::Schlaf],
            contexts: vec![Context::Abend],
            steps: vec![
                "Lege dich bequem hin.".into(),
                "Beginne mit deiner rechten Hand. Balle sie zur Faust, halte die Spannung, und löse sie wieder.".into(),
                "Fahre so fort mit anderen Muskelgruppen: Arme, Gesicht, Schultern, Bauch, Beine und Füße.".into(),
            ],
        },
        Tool {
            id: "weicher_bauch".into(),
            category: ToolCategory::Beruhigen,
            title: "Du möchtest dich innerlich weicher und entspannter fühlen.".into(),
            subtitle: "Weicher-Bauch-Übung".into(),
            description: "Eine sanfte Atemübung, die hilft, Anspannung im Bauchraum zu lösen und das Zwerchfell zu entspannen.".into(),
            duration_minutes: 3,
            tags: vec![Tag::Atemtraining, Tag::Koerperfokus],
            contexts: vec![Context::Abend, Context::Morgen, Context::Akut],
            steps: vec![
                "Lege eine Hand auf deinen Bauch.".into(),
                "Atme tief in den Bauch ein, sodass sich deine Hand hebt.".into(),
                "Atme langsam aus und lasse den Bauch ganz weich werden.".into(),
            ],
        },
        Tool {
            id: "5_finger".into(),
            category: ToolCategory::Fokussieren,
            title: "Du möchtest dich wieder sicher und geerdet fühlen.".into(),
            subtitle: "5-Finger-Übung".into(),
            description: "Eine einfache und diskrete Übung, die deine Sinne nutzt, um dich schnell zu erden und zu beruhigen.".into(),
            duration_minutes: 3,
            tags: vec![Tag::Panikattacke, Tag::Koerperfokus],
            contexts: vec![Context::Akut, Context::Unterwegs],
            steps: vec![
                "Strecke eine Hand aus.".into(),
                "Fahre mit dem Zeigefinger der anderen Hand langsam deinen Daumen entlang, während du einatmest.".into(),
                "Fahre beim Ausatmen wieder hinunter.".into(),
                "Wiederhole dies für jeden Finger.".into(),
            ],
        },
        Tool {
            id: "handschalen".into(),
            category: ToolCategory::Beruhigen,
            title: "Du brauchst sofort Hilfe bei starker Anspannung oder Panik.".into(),
            subtitle: "Handschalenübung (Notfall-Atemhilfe)".into(),
            description: "Eine Notfalltechnik, die den Vagusnerv stimuliert und bei akuter Anspannung oder Panik schnell beruhigt.".into(),
            duration_minutes: 3,
            tags: vec![Tag::Atemtraining, Tag::Panikattacke],
            contexts: vec![Context::Akut],
            steps: vec![
                "Forme deine Hände zu einer Schale.".into(),
                "Lege die Schale über Mund und Nase, sodass sie abschließt.".into(),
                "Atme ruhig in deine Hände hinein und wieder aus.".into(),
                "Dies verlangsamt deine Atmung und hilft deinem Nervensystem, sich zu regulieren.".into(),
            ],
        },
    ]
}

pub const SYMPTOM_OPTIONS: [&str; 8] = [
    "Herzklopfen / Herzrasen",
    "Atemnot / Engegefühl",
    "Schwindel / Benommenheit",
    "Zittern / Schwitzen",
    "Übelkeit / Magenprobleme",
    "Kribbeln / Taubheitsgefühl",
    "Hitze- oder Kältegefühle",
    "Angst vor Kontrollverlust",
];

pub const MOTIVATIONAL_QUOTES: [&str; 9] = [
    "Jeder ruhige Atemzug ist ein Sieg. 🧘",
    "Du bist stärker, als du denkst. Gib dir Zeit. 💪",
    "Fortschritt, nicht Perfektion, ist das Ziel. 🌱",
    "Gefühle sind wie Wolken – sie ziehen vorüber. ☁️",
    "Sei heute besonders nachsichtig mit dir selbst. ❤️",
    "Ein kleiner Schritt heute ist ein großer Erfolg für morgen. ✨",
    "Du hast alles, was du brauchst, um diesen Moment zu meistern. 🕊️",
    "Akzeptiere, was du nicht ändern kannst. Ändere, was du kannst. 🙏",
    "Auch der längste Weg beginnt mit einem einzigen Schritt. 👣",
];
