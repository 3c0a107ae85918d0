//! Shipped source and patch declarations for the Xiaomi Book 12.4.
//!
//! Everything in this module is data: the pipeline is generic over these
//! tables. File lists mirror the vendor driver packages; the MCFG map is
//! based on the driver package's inf contents.

use anyhow::Result;

use crate::filemap::FileMap;
use crate::patch::{self, PatchStep};
use crate::source::FirmwareSource;

/// Platform directory under qcom/ for vendor-signed images.
pub const PATH_PLATFORM: &str = "XIAOMI/BOOK124";

/// Venus firmware directory under qcom/.
pub const PATH_VENUS: &str = "venus-5.2";

/// Board file folded into ath10k board-2.bin.
pub const ATH10K_BOARD_FILE: &str = "bdwlan.b58";

/// Identifier the board file is indexed under in board-2.bin.
pub const ATH10K_BOARD_NAME: &str = "bus=snoc,qmi-board-id=ff,qmi-chip-id=30224";

const URL_AARCH64_FIRMWARE_REPO: &str =
    "https://raw.githubusercontent.com/linux-surface/aarch64-firmware/main/firmware";
const URL_LINUX_FIRMWARE_REPO: &str =
    "https://git.kernel.org/pub/scm/linux/kernel/git/firmware/linux-firmware.git/plain";

/// MCFG modem configuration map (file map based on inf contents).
const MCFG_FILES: &[(&str, &str)] = &[
    ("MCFG/mbn_hw.dig.78", "modem_pr/mcfg/configs/mcfg_hw/mbn_hw.dig"),
    ("MCFG/mbn_hw.txt.79", "modem_pr/mcfg/configs/mcfg_hw/mbn_hw.txt"),
    ("MCFG/mbn_sw.dig.221", "modem_pr/mcfg/configs/mcfg_sw/mbn_sw.dig"),
    ("MCFG/mbn_sw.txt.222", "modem_pr/mcfg/configs/mcfg_sw/mbn_sw.txt"),
    ("MCFG/mcfg_hw.mbn.10", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.11", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55_fusion/7+7_mode/dr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.12", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55_fusion/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.13", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55_fusion/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.14", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.15", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/la/7+7_mode/dr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.16", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.17", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.18", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.19", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.1", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/5g_default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.20", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/wp8/7+7_mode/dr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.21", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.22", "modem_pr/mcfg/configs/mcfg_hw/generic/common/msm8998/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.23", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.24", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.25", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/la/dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.26", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.27", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.28", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/wd/dssa/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.29", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.2", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/cust_default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.30", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.31", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sc8180x/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.32", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.33", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.34", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.35", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.36", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/wd/dssa/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.37", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.38", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.39", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm1000/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.3", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/sc8180x.gen.prod/5g_default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.40", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm660/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.41", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm660/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.42", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm660/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.43", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm670/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.44", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm670/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.45", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm670/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.46", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.47", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.48", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.49", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.4", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/sc8180x.gen.prod/cust_default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.50", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.51", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.52", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm845/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.53", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.54", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.55", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.56", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.57", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.58", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.59", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdm855/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.5", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/sc8180x.gen.prod/default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.60", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx20m_fusion/7+7_mode/dr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.61", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx20m_fusion/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.62", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx20m_fusion/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.63", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx20/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.64", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx20/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.65", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx24/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.66", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx24/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.67", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx24_fusion/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.68", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sdx24_fusion/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.69", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/cmcc_subsidized/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.6", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/sc8180x.genimss.prod/default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.70", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/la/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.71", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/la/dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.72", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/la/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.73", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/la/ss_apq_only/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.74", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/wd/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.75", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/wd/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.76", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/wp8/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.77", "modem_pr/mcfg/configs/mcfg_hw/generic/common/sm8150/wp8/ss/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.7", "modem_pr/mcfg/configs/mcfg_hw/generic/common/default/sc8180x.genmd.prod/default/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.8", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55/7+7_mode/dr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_hw.mbn.9", "modem_pr/mcfg/configs/mcfg_hw/generic/common/mdm9x55/7+7_mode/sr_dsds/mcfg_hw.mbn"),
    ("MCFG/mcfg_sw.mbn.100", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/commercial/openmkt/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.101", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/commercial/volte_openmkt/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.102", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/cta/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.103", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/eps_only_volte_conf/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.104", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/noapn_vo_conf/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.105", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/test/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.106", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/test_eps_only/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.107", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/test_no_apn/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.108", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/lab/volte_conf/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.109", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cu/commercial/openmkt/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.110", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cu/commercial/subsidized/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.111", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cu/commercial/volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.112", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cu/lab/test/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.113", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/5g_default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.114", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/cust_default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.115", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/sc8180x.gen.prod/5g_default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.116", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/sc8180x.gen.prod/cust_default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.117", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/sc8180x.gen.prod/default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.118", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/sc8180x.genimss.prod/default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.119", "modem_pr/mcfg/configs/mcfg_sw/generic/common/default/sc8180x.genmd.prod/default/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.120", "modem_pr/mcfg/configs/mcfg_sw/generic/common/multimbn/multi_mbn/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.121", "modem_pr/mcfg/configs/mcfg_sw/generic/common/row/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.122", "modem_pr/mcfg/configs/mcfg_sw/generic/common/w_one/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.123", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/bouygues/commercial/france/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.124", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/austria/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.125", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/croatia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.126", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/cz/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.127", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/greece/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.128", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/hungary/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.129", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/nl/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.130", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/pl/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.131", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/commercial/slovakia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.132", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/non_volte/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.133", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/dt/volte/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.134", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/ee/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.135", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/elisa/commercial/fi/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.136", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/h3g/commercial/austria/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.137", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/h3g/commercial/denmark/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.138", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/h3g/commercial/italy/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.139", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/h3g/commercial/se/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.140", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/h3g/commercial/uk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.141", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/france/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.142", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/group_non_ims/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.143", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/poland/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.144", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/romania/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.145", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/slovakia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.146", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/orange/commercial/spain/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.147", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/sfr/commercial/fr/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.148", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/swisscom/commercial/swiss/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.149", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/tdc/commercial/denmark/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.150", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/tele2/commercial/nl/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.151", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/tele2/commercial/sweden/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.152", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telefonica/commercial/de/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.153", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telefonica/commercial/uk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.154", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telefonica/non_volte/spain/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.155", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telenor/commercial/denmark/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.156", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telenor/commercial/norway/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.157", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telia/commercial/norway/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.158", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/telia/commercial/sweden/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.159", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/tim/commercial/italy/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.160", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/commercial/hungary/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.161", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/commercial/ireland/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.162", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/non_volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.163", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/cz/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.164", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/germany/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.165", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/italy/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.166", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/netherlands/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.167", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/portugal/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.168", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/safrica/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.169", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/spain/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.170", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/turkey/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.171", "modem_pr/mcfg/configs/mcfg_sw/generic/eu/vodafone/volte/uk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.172", "modem_pr/mcfg/configs/mcfg_sw/generic/korea/kt/commercial_kt_lte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.173", "modem_pr/mcfg/configs/mcfg_sw/generic/korea/lgu/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.174", "modem_pr/mcfg/configs/mcfg_sw/generic/korea/skt/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.175", "modem_pr/mcfg/configs/mcfg_sw/generic/korea/tta/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.176", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/amx/commercial/mx/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.177", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/amx/non_volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.178", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/amx/volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.179", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/claro/commercial/colombia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.180", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/telefonica/commercial/colombia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.181", "modem_pr/mcfg/configs/mcfg_sw/generic/latam/telefonica/commercial/peru/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.182", "modem_pr/mcfg/configs/mcfg_sw/generic/mea/stc/commercial/sa/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.183", "modem_pr/mcfg/configs/mcfg_sw/generic/na/att/firstnet/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.184", "modem_pr/mcfg/configs/mcfg_sw/generic/na/att/non_volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.185", "modem_pr/mcfg/configs/mcfg_sw/generic/na/att/volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.186", "modem_pr/mcfg/configs/mcfg_sw/generic/na/bell/commercial/ca/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.187", "modem_pr/mcfg/configs/mcfg_sw/generic/na/rogers/commercial/ca/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.188", "modem_pr/mcfg/configs/mcfg_sw/generic/na/sprint/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.189", "modem_pr/mcfg/configs/mcfg_sw/generic/na/sprint/vowifi/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.190", "modem_pr/mcfg/configs/mcfg_sw/generic/na/telus/commercial/ca/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.191", "modem_pr/mcfg/configs/mcfg_sw/generic/na/tmo/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.192", "modem_pr/mcfg/configs/mcfg_sw/generic/na/uscc/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.193", "modem_pr/mcfg/configs/mcfg_sw/generic/na/verizon/cdmaless/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.194", "modem_pr/mcfg/configs/mcfg_sw/generic/na/verizon/hvolte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.195", "modem_pr/mcfg/configs/mcfg_sw/generic/na/verizon/imsless/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.196", "modem_pr/mcfg/configs/mcfg_sw/generic/russia/beeline/gen_3gpp/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.197", "modem_pr/mcfg/configs/mcfg_sw/generic/russia/megafon/commercial/ru/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.198", "modem_pr/mcfg/configs/mcfg_sw/generic/russia/mts/commercial/ru/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.199", "modem_pr/mcfg/configs/mcfg_sw/generic/sa/brazil/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.200", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/3hk/commercial/hk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.201", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/ais/commercial/thailand/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.202", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/apt/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.203", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/chunghwatel/commercial/tw/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.204", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/dtac/commercial/volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.205", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/fareastone/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.206", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/globe/commercial/ph/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.207", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/hkt/commercial/hk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.208", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/m1/commercial/sg/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.209", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/p1/commercial/malaysia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.210", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/singtel/commercial/singapore/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.211", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/smartfren/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.212", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/smartfren/commercial/vowifi/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.213", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/smartone/commercial/hk/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.214", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/starhub/commercial/sg/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.215", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/tm/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.216", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/truemove/commercial/volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.217", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/tstar/commercial/tw/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.218", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/umobile/commercial/malaysia/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.219", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/viettel/commercial/vietnam/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.220", "modem_pr/mcfg/configs/mcfg_sw/generic/sea/ytl/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.81", "modem_pr/mcfg/configs/mcfg_sw/generic/af/cellc/commercial/safrica/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.82", "modem_pr/mcfg/configs/mcfg_sw/generic/af/moroccotel/commercial/ma/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.83", "modem_pr/mcfg/configs/mcfg_sw/generic/apac/dcm/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.84", "modem_pr/mcfg/configs/mcfg_sw/generic/apac/kddi/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.85", "modem_pr/mcfg/configs/mcfg_sw/generic/apac/reliance/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.86", "modem_pr/mcfg/configs/mcfg_sw/generic/apac/sbm/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.87", "modem_pr/mcfg/configs/mcfg_sw/generic/aunz/optus/commercial/au/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.88", "modem_pr/mcfg/configs/mcfg_sw/generic/aunz/telstra/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.89", "modem_pr/mcfg/configs/mcfg_sw/generic/aunz/vodafone/commercial/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.90", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/commercial/volte_openmkt/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.91", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/agnss_loctech/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.92", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/conf_volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.93", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/eps_only/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.94", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/lpp_loctech/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.95", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/nsiot_volte/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.96", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/rrlp_loctech/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.97", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/tgl_comb_attach/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.98", "modem_pr/mcfg/configs/mcfg_sw/generic/china/cmcc/lab/w_irat_comb_attach/mcfg_sw.mbn"),
    ("MCFG/mcfg_sw.mbn.99", "modem_pr/mcfg/configs/mcfg_sw/generic/china/ct/commercial/hvolte_openmkt/mcfg_sw.mbn"),
    ("MCFG/oem_hw.txt.80", "modem_pr/mcfg/configs/mcfg_hw/oem_hw.txt"),
    ("MCFG/oem_sw.txt.223", "modem_pr/mcfg/configs/mcfg_sw/oem_sw.txt"),
];

/// The source registry, in gather order.
///
/// Construction validates every file map; a duplicate source name anywhere
/// fails here, before anything touches the output tree.
pub fn sources() -> Result<Vec<FirmwareSource>> {
    Ok(vec![
        // PD maps for pd-mapper.service
        FirmwareSource::download(
            "pd-maps",
            format!("qcom/{PATH_PLATFORM}"),
            format!("{URL_AARCH64_FIRMWARE_REPO}/qcom/msft/surface/pro-x-sq2"),
            FileMap::from_list([
                "adspr.jsn",
                "adspua.jsn",
                "cdspr.jsn",
                "charger.jsn",
                "modemr.jsn",
                "modemuw.jsn",
            ])?,
        ),
        // Bluetooth
        FirmwareSource::driver_store(
            "bluetooth",
            "qca",
            "qcbtfmuart8180",
            FileMap::from_list([
                "crbtfw21.tlv",
                "crnv21.b3c",
                "crnv21.b44",
                "crnv21.b45",
                "crnv21.b46",
                "crnv21.b47",
                "crnv21.b71",
                "crnv21.bin",
            ])?,
        ),
        // GPU (Adreno 680)
        FirmwareSource::download(
            "gpu/base",
            "qcom",
            format!("{URL_AARCH64_FIRMWARE_REPO}/qcom"),
            FileMap::from_list(["a680_gmu.bin", "a680_sqe.fw"])?,
        ),
        FirmwareSource::driver_store(
            "gpu/vendor",
            format!("qcom/{PATH_PLATFORM}"),
            "qcdx8180",
            FileMap::from_list(["qcdxkmsuc8180.mbn", "qcvss8180.mbn"])?,
        ),
        // WLAN
        FirmwareSource::driver_store(
            "wlan/vendor",
            format!("qcom/{PATH_PLATFORM}"),
            "qcwlan8180",
            FileMap::from_list(["wlanmdsp.mbn"])?,
        ),
        FirmwareSource::driver_store(
            "wlan/ath10k/board",
            "ath10k/WCN3990/hw1.0/boards",
            "qcwlan8180",
            FileMap::from_list([
                "bdwlan.b5f",
                "bdwlan.b36",
                "bdwlan.b37",
                "bdwlan.b46",
                "bdwlan.b47",
                "bdwlan.b48",
                "bdwlan.b58",
                "bdwlan.b71",
                "bdwlan.bin",
                "bdwlanu.b5f",
                "bdwlanu.b58",
            ])?,
        ),
        FirmwareSource::download(
            "wlan/ath10k/firmware-5",
            "ath10k/WCN3990/hw1.0",
            format!("{URL_LINUX_FIRMWARE_REPO}/ath10k/WCN3990/hw1.0"),
            FileMap::from_list(["firmware-5.bin"])?,
        ),
        // MCFG
        FirmwareSource::driver_store(
            "mcfg",
            format!("qcom/{PATH_PLATFORM}"),
            "mcfg_subsys_ext8180",
            FileMap::from_pairs(MCFG_FILES.iter().copied())?,
        ),
        // ADSP
        FirmwareSource::driver_store(
            "adsp/vendor",
            format!("qcom/{PATH_PLATFORM}"),
            "qcsubsys_ext_adsp8180",
            FileMap::from_list(["qcadsp8180.mbn"])?,
        ),
        // CDSP
        FirmwareSource::driver_store(
            "cdsp/vendor",
            format!("qcom/{PATH_PLATFORM}"),
            "qcsubsys_ext_cdsp8180",
            FileMap::from_list(["qccdsp8180.mbn"])?,
        ),
        // MPSS
        FirmwareSource::driver_store(
            "mpss/vendor",
            format!("qcom/{PATH_PLATFORM}"),
            "qcsubsys_ext_mpss8180",
            FileMap::from_list(["qcmpss8180.mbn", "qcmpss8180_nm.mbn"])?,
        ),
        FirmwareSource::driver_store(
            "mpss/library",
            format!("qcom/{PATH_PLATFORM}"),
            "mcfg_subsys_ext8180",
            FileMap::from_list(["qdsp6m.qdb"])?,
        ),
    ])
}

/// The patch list, in apply order.
pub fn patches() -> Vec<PatchStep> {
    vec![
        PatchStep {
            name: "venus",
            run: patch::venus::extract,
        },
        PatchStep {
            name: "ath10k/board-2.bin",
            run: patch::ath10k::encode_board,
        },
        PatchStep {
            name: "ath10k/firmware-5.bin",
            run: patch::ath10k::enable_features,
        },
        PatchStep {
            name: "qca/bt",
            run: patch::qca_bt::symlink_aliases,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_registry_constructs() {
        let sources = sources().expect("declared file maps must have unique keys");
        assert_eq!(sources.len(), 12);
    }

    #[test]
    fn shipped_patch_order() {
        let names: Vec<_> = patches().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "venus",
                "ath10k/board-2.bin",
                "ath10k/firmware-5.bin",
                "qca/bt"
            ]
        );
    }
}
