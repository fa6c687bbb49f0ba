//! `microsoft.graph.callRecords`: per-stream media quality of a Teams call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::wire_enum;
use crate::odata::AdditionalData;
use crate::parse_node::impl_graph_model;

wire_enum! {
    pub enum MediaStreamDirection {
        CallerToCallee = "callerToCallee",
        CalleeToCaller = "calleeToCaller",
    }
}

wire_enum! {
    pub enum AudioCodec {
        Unknown = "unknown",
        Invalid = "invalid",
        Cn = "cn",
        Pcma = "pcma",
        Pcmu = "pcmu",
        AmrWide = "amrWide",
        G722 = "g722",
        G7221 = "g7221",
        G7221c = "g7221c",
        G729 = "g729",
        MultiChannelAudio = "multiChannelAudio",
        Muchv2 = "muchv2",
        Opus = "opus",
        Satin = "satin",
        SatinFullband = "satinFullband",
        RtAudio8 = "rtAudio8",
        RtAudio16 = "rtAudio16",
        Silk = "silk",
        SilkNarrow = "silkNarrow",
        SilkWide = "silkWide",
        Siren = "siren",
        XmsRta = "xmsRta",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum VideoCodec {
        Unknown = "unknown",
        Invalid = "invalid",
        Av1 = "av1",
        H263 = "h263",
        H264 = "h264",
        H264s = "h264s",
        H264uc = "h264uc",
        H265 = "h265",
        Rtvc1 = "rtvc1",
        RtVideo = "rtVideo",
        Xrtvc1 = "xrtvc1",
        UnknownFutureValue = "unknownFutureValue",
    }
}

/// Quality metrics of one media stream in a call segment.
///
/// Jitter, round-trip and freeze figures are ISO 8601 durations
/// (`"PT0.015S"`) and are kept as strings. Rates and ratios are `f32`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaStream {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    pub audio_codec: Option<AudioCodec>,
    pub average_audio_degradation: Option<f32>,
    pub average_audio_network_jitter: Option<String>,
    /// Bits per second.
    pub average_bandwidth_estimate: Option<i64>,
    pub average_freeze_duration: Option<String>,
    pub average_jitter: Option<String>,
    pub average_packet_loss_rate: Option<f32>,
    pub average_ratio_of_concealed_samples: Option<f32>,
    pub average_received_frame_rate: Option<f32>,
    pub average_round_trip_time: Option<String>,
    pub average_video_frame_loss_percentage: Option<f32>,
    pub average_video_frame_rate: Option<f32>,
    pub average_video_packet_loss_rate: Option<f32>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub is_audio_forward_error_correction_used: Option<bool>,
    pub low_frame_rate_ratio: Option<f32>,
    pub low_video_processing_capability_ratio: Option<f32>,
    pub max_audio_network_jitter: Option<String>,
    pub max_jitter: Option<String>,
    pub max_packet_loss_rate: Option<f32>,
    pub max_ratio_of_concealed_samples: Option<f32>,
    pub max_round_trip_time: Option<String>,
    /// Packet count for the stream.
    pub packet_utilization: Option<i64>,
    pub post_forward_error_correction_packet_loss_rate: Option<f32>,
    pub rms_freeze_duration: Option<String>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub stream_direction: Option<MediaStreamDirection>,
    pub stream_id: Option<String>,
    pub video_codec: Option<VideoCodec>,
    /// True when media bypassed the Teams media relay.
    pub was_media_bypassed: Option<bool>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    MediaStream = "#microsoft.graph.callRecords.mediaStream" {
        odata_type => "@odata.type",
        audio_codec => "audioCodec",
        average_audio_degradation => "averageAudioDegradation",
        average_audio_network_jitter => "averageAudioNetworkJitter",
        average_bandwidth_estimate => "averageBandwidthEstimate",
        average_freeze_duration => "averageFreezeDuration",
        average_jitter => "averageJitter",
        average_packet_loss_rate => "averagePacketLossRate",
        average_ratio_of_concealed_samples => "averageRatioOfConcealedSamples",
        average_received_frame_rate => "averageReceivedFrameRate",
        average_round_trip_time => "averageRoundTripTime",
        average_video_frame_loss_percentage => "averageVideoFrameLossPercentage",
        average_video_frame_rate => "averageVideoFrameRate",
        average_video_packet_loss_rate => "averageVideoPacketLossRate",
        end_date_time => "endDateTime",
        is_audio_forward_error_correction_used => "isAudioForwardErrorCorrectionUsed",
        low_frame_rate_ratio => "lowFrameRateRatio",
        low_video_processing_capability_ratio => "lowVideoProcessingCapabilityRatio",
        max_audio_network_jitter => "maxAudioNetworkJitter",
        max_jitter => "maxJitter",
        max_packet_loss_rate => "maxPacketLossRate",
        max_ratio_of_concealed_samples => "maxRatioOfConcealedSamples",
        max_round_trip_time => "maxRoundTripTime",
        packet_utilization => "packetUtilization",
        post_forward_error_correction_packet_loss_rate => "postForwardErrorCorrectionPacketLossRate",
        rms_freeze_duration => "rmsFreezeDuration",
        start_date_time => "startDateTime",
        stream_direction => "streamDirection",
        stream_id => "streamId",
        video_codec => "videoCodec",
        was_media_bypassed => "wasMediaBypassed",
    }
}
