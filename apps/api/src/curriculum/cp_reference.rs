//! Reference CP (Capaian Pembelajaran) text per subject and phase.
//!
//! Used only to enrich suggestion prompts. Pairs missing from the table are
//! legitimate: the prompt then falls back to a generic instruction.

use crate::curriculum::models::Subject;
use crate::curriculum::phase::Phase;

static CP_REFERENCE: &[(Subject, Phase, &str)] = &[
    (
        Subject::BahasaIndonesia,
        Phase::A,
        "Peserta didik memiliki kemampuan berbahasa untuk berkomunikasi dan bernalar sesuai \
        dengan tujuan, kepada teman sebaya dan orang dewasa di sekitar tentang diri dan \
        lingkungannya. Peserta didik menunjukkan minat serta mampu memahami dan menyampaikan \
        pesan, mengekspresikan perasaan dan gagasan, serta membaca dan menulis permulaan.",
    ),
    (
        Subject::BahasaIndonesia,
        Phase::B,
        "Peserta didik memiliki kemampuan berbahasa untuk berkomunikasi dan bernalar sesuai \
        dengan tujuan dan konteks sosial. Peserta didik menunjukkan minat terhadap teks, mampu \
        memahami, mengolah, dan menginterpretasi informasi dan pesan dari paparan lisan dan \
        tulis tentang topik yang dikenali dalam teks narasi dan informatif.",
    ),
    (
        Subject::BahasaIndonesia,
        Phase::C,
        "Peserta didik memiliki kemampuan berbahasa untuk berkomunikasi dan bernalar sesuai \
        dengan tujuan dan konteks sosial dan akademis. Peserta didik mampu memahami, mengolah, \
        menginterpretasi, dan mengevaluasi berbagai tipe teks tentang topik yang beragam, serta \
        mampu menyusun dan menyajikan gagasan dengan kosakata yang tepat.",
    ),
    (
        Subject::Matematika,
        Phase::A,
        "Peserta didik dapat menunjukkan pemahaman dan memiliki intuisi bilangan (number sense) \
        pada bilangan cacah sampai 100, melakukan penjumlahan dan pengurangan bilangan cacah \
        sampai 20, mengenal bangun datar dan bangun ruang, serta membandingkan panjang dan berat \
        benda secara langsung.",
    ),
    (
        Subject::Matematika,
        Phase::B,
        "Peserta didik menunjukkan pemahaman dan intuisi bilangan pada bilangan cacah sampai \
        10.000, melakukan operasi penjumlahan, pengurangan, perkalian, dan pembagian, mengenal \
        pecahan sederhana, mengukur panjang dan berat dengan satuan baku, serta menyajikan data \
        dalam tabel dan diagram gambar.",
    ),
    (
        Subject::Matematika,
        Phase::C,
        "Peserta didik menunjukkan pemahaman dan intuisi bilangan pada bilangan cacah sampai \
        1.000.000, melakukan operasi hitung bilangan cacah dan pecahan, menentukan keliling dan \
        luas bangun datar, menyelesaikan masalah yang berkaitan dengan kelipatan dan faktor, \
        serta mengurutkan dan menyajikan data dalam diagram batang.",
    ),
    // IPAS is taught from phase B onwards; there is no phase A reference.
    (
        Subject::Ipas,
        Phase::B,
        "Peserta didik mengidentifikasi proses perubahan wujud zat dan perubahan bentuk energi \
        dalam kehidupan sehari-hari, mendeskripsikan bagian tubuh tumbuhan dan fungsinya, \
        mengenal keragaman budaya dan kearifan lokal di lingkungan sekitar, serta menjelaskan \
        sejarah daerah tempat tinggalnya.",
    ),
    (
        Subject::Ipas,
        Phase::C,
        "Peserta didik melakukan simulasi dengan menggunakan gambar atau model tentang sistem \
        organ tubuh manusia, menganalisis hubungan antara bentuk serta fungsi bagian tubuh, \
        mendeskripsikan sistem tata surya, serta mengaitkan keragaman budaya dan kegiatan \
        ekonomi masyarakat dengan kondisi geografis Indonesia.",
    ),
    (
        Subject::PendidikanPancasila,
        Phase::A,
        "Peserta didik mampu mengenal dan menceritakan simbol dan sila-sila Pancasila dalam \
        lambang negara Garuda Pancasila, mengidentifikasi dan menceritakan aturan di keluarga \
        dan sekolah, serta menyebutkan identitas dirinya sesuai dengan jenis kelamin, ciri-ciri \
        fisik, dan hobinya.",
    ),
    (
        Subject::PendidikanPancasila,
        Phase::B,
        "Peserta didik mampu mengidentifikasi dan menceritakan makna sila-sila Pancasila serta \
        penerapannya dalam kehidupan sehari-hari, mengidentifikasi aturan dan hak serta \
        kewajiban sebagai anggota keluarga dan warga sekolah, serta menghargai keberagaman di \
        lingkungan sekitar.",
    ),
    (
        Subject::PendidikanPancasila,
        Phase::C,
        "Peserta didik mampu menganalisis sejarah kelahiran Pancasila, menjelaskan makna \
        Bhinneka Tunggal Ika, mengidentifikasi ragam norma dalam kehidupan bermasyarakat, serta \
        menunjukkan perilaku bekerja sama dalam menjaga persatuan di lingkungan sekitar.",
    ),
    (
        Subject::Pjok,
        Phase::A,
        "Peserta didik dapat melakukan aktivitas gerak dasar lokomotor, non-lokomotor, dan \
        manipulatif dalam bentuk permainan sederhana, serta menunjukkan perilaku hidup bersih \
        dan sehat di lingkungan rumah dan sekolah.",
    ),
];

/// Returns the reference CP for `(subject, phase)`, if one exists.
pub fn reference_cp(subject: Subject, phase: Phase) -> Option<&'static str> {
    CP_REFERENCE
        .iter()
        .find(|(s, p, _)| *s == subject && *p == phase)
        .map(|(_, _, text)| *text)
}
