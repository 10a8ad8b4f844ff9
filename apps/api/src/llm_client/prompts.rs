// Shared prompt fragments.
// Each requester keeps its own prompt templates in generation::prompts;
// this file carries the cross-cutting system instruction.

/// System instruction sent with every call.
pub const CURRICULUM_EXPERT_SYSTEM: &str = "Anda adalah ahli kurikulum Sekolah Dasar di Indonesia \
    yang memahami Kurikulum Merdeka dan Pembelajaran Mendalam. \
    Jawab HANYA dengan JSON yang sesuai skema yang diberikan. \
    Jangan menambahkan teks di luar objek JSON. \
    Jangan menggunakan pagar kode markdown.";
