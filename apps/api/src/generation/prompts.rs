// Prompt templates for the Generation module.
// Placeholders are `{name}` and filled in a single pass by `fill_template`.

/// Full RPM content prompt.
/// Replace: {school}, {class_level}, {subject}, {materi}, {cp}, {tp}, {dimensions}, {pedagogies}
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Bertindaklah sebagai ahli kurikulum SD Indonesia. Buatlah konten Rencana Pembelajaran Mendalam (RPM) untuk {school}.

Data Input:
- Kelas: {class_level}
- Mapel: {subject}
- Materi: {materi}
- CP: {cp}
- TP: {tp}
- Dimensi Profil Lulusan (Profil Pelajar): {dimensions}
- Praktik Pedagogis per Pertemuan: {pedagogies}

Tugas:
Lengkapi bagian-bagian rencana pembelajaran yang kosong berikut ini dengan bahasa Indonesia yang formal, edukatif, namun aplikatif.

INSTRUKSI FORMATTING PENTING:
Gunakan tag HTML <ul> dan <li> untuk membuat daftar poin agar output terlihat rapi.
Gunakan tag HTML <ol> dan <li> untuk langkah-langkah kegiatan yang berurutan.

1. Karakteristik Siswa: Deskripsikan karakteristik umum siswa kelas {class_level} SD. Format: <ul><li>...</li></ul>
2. Lintas Disiplin Ilmu: Hubungkan materi ini dengan mata pelajaran lain. Format: <ul><li>...</li></ul>
3. Topik Pembelajaran: Breakdown materi menjadi topik spesifik. Format: <ul><li>...</li></ul>
4. Kemitraan: Siapa yang bisa dilibatkan (orang tua, ahli, lingkungan)? Format: <ul><li>...</li></ul>
5. Lingkungan: Bagaimana pengaturan kelas atau luar kelas yang mendukung? Format: <ul><li>...</li></ul>
6. Digital: Rekomendasi alat digital spesifik (misal: Quizizz, Canva, Youtube, dll). Format: <ul><li>...</li></ul>
7. Pengalaman Belajar:
   - Memahami (Awal): Kegiatan pemantik yang 'berkesadaran/bermakna/menggembirakan'. Format: <ol><li>...</li></ol>
   - Mengaplikasi (Inti): Rangkaian kegiatan inti yang SANGAT SESUAI dengan sintaks {pedagogies}. Format: <ol><li>...</li></ol>
   - Refleksi (Penutup): Kegiatan refleksi dan penutup. Format: <ol><li>...</li></ol>
8. Asesmen: Ide untuk Asesmen Awal, Proses, dan Akhir. Semuanya Format: <ul><li>...</li></ul>
9. Rubrik Penilaian: Buat tabel rubrik penilaian dengan skala 1-4."#;

/// Suggestion prompt.
/// Replace: {field_name}, {subject}, {class_level}, {phase}, {context}
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"Berikan 5 opsi pilihan {field_name} untuk mata pelajaran {subject} Kelas {class_level} SD ({phase}).
{context}
Output wajib JSON: { "options": ["opsi 1", "opsi 2", ...] }"#;

pub const CP_WITH_REFERENCE: &str =
    "Referensi CP RESMI: \"{reference}\". Berikan 5 variasi kalimat CP yang spesifik.";
pub const CP_WITHOUT_REFERENCE: &str =
    "Berikan 5 opsi CP yang sesuai Kurikulum Merdeka untuk mata pelajaran ini.";
pub const TP_FROM_CONTEXT: &str =
    "Berdasarkan CP: \"{context}\", berikan 5 TP yang logis dan terukur.";
pub const TP_FROM_REFERENCE: &str =
    "Gunakan referensi CP ini: \"{reference}\". Berikan 5 TP yang relevan.";
pub const MATERI_FROM_CONTEXT: &str =
    "Berdasarkan CP/TP: \"{context}\", sarankan 5 topik materi pokok.";


/// Substitutes `{name}` placeholders in one left-to-right pass.
///
/// Inserted values are never rescanned, so braces typed by the user survive verbatim.
/// Unknown names and stray braces are copied through unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
